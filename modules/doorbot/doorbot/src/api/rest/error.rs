use axum::http::StatusCode;

use super::problem::Problem;
use crate::domain::error::DomainError;

/// Map a domain error to a Problem response.
#[must_use]
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::AccountNotFound { .. } | DomainError::UnknownHost { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", "Account not found")
        }
        DomainError::PersonNotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", "Person not found")
        }
        DomainError::DoorNotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", "Door not found")
        }
        DomainError::Forbidden { reason } => {
            tracing::warn!(error = ?e, "request forbidden");
            Problem::new(StatusCode::FORBIDDEN, "Forbidden", reason.clone())
        }
        DomainError::Validation { field, message } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Failed",
            format!("Validation error on '{field}': {message}"),
        ),
        DomainError::Database { .. } => {
            tracing::error!(error = ?e, "internal error");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred",
            )
        }
    };

    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}

/// Lets handlers use `?` on domain results.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn not_found_variants_map_to_404() {
        for e in [
            DomainError::person_not_found(Uuid::new_v4()),
            DomainError::door_not_found(Uuid::new_v4()),
            DomainError::unknown_host("acme"),
        ] {
            assert_eq!(Problem::from(e).status, StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn database_detail_is_not_leaked() {
        let p = Problem::from(DomainError::database("UNIQUE constraint failed: people.id"));
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!p.detail.contains("UNIQUE"));
    }

    #[test]
    fn forbidden_keeps_reason() {
        let p = Problem::from(DomainError::forbidden("person is not reachable"));
        assert_eq!(p.status, StatusCode::FORBIDDEN);
        assert_eq!(p.detail, "person is not reachable");
    }
}
