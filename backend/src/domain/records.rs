//! Records service orchestrating registration, lecturer, and evaluation
//! operations.
//!
//! Each operation is a complete unit of work: load the relevant
//! collections through the store port, validate, assign an identifier for
//! creates, and persist the updated collection. No state is held between
//! calls, so every call observes durable state as of its own load.

use std::sync::Arc;

use serde_json::json;

use crate::domain::ports::CollectionStore;
use crate::domain::{
    EmailAddress, Error, Evaluation, Lecturer, LecturerId, Rating, User, UserIndex,
};

/// Parameters for a new evaluation submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvaluation {
    /// Index of the submitting user.
    pub user_index: String,
    /// Identifier of the evaluated lecturer.
    pub lecturer_id: String,
    /// Raw rating value; range-checked during submission.
    pub rating: i64,
    /// Optional free-form remarks.
    pub comments: Option<String>,
}

/// Use-case service for the three record collections.
#[derive(Clone)]
pub struct RecordsService {
    store: Arc<dyn CollectionStore>,
}

impl RecordsService {
    /// Create a service backed by the given store.
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    /// Register a user, assigning the next sequential index.
    ///
    /// Fails with `invalid_input` when the email is not syntactically
    /// valid and with `duplicate_entity` when it is already registered
    /// (exact, case-sensitive match).
    pub async fn register_user(&self, name: &str, email: &str) -> Result<User, Error> {
        let email = EmailAddress::new(email).map_err(|err| {
            Error::invalid_input(err.to_string()).with_details(json!({ "field": "email" }))
        })?;

        let mut users = self.store.load_users().await?;
        if users.iter().any(|existing| existing.email == email) {
            return Err(Error::duplicate_entity("User already exists"));
        }

        let user = User {
            index: UserIndex::for_position(users.len() + 1),
            name: name.to_owned(),
            email,
        };
        users.push(user.clone());
        self.store.save_users(&users).await?;
        Ok(user)
    }

    /// Add a lecturer, assigning the next sequential identifier.
    ///
    /// Name and department carry no uniqueness constraint.
    pub async fn add_lecturer(&self, name: &str, department: &str) -> Result<Lecturer, Error> {
        let mut lecturers = self.store.load_lecturers().await?;
        let lecturer = Lecturer {
            id: LecturerId::for_position(lecturers.len() + 1),
            name: name.to_owned(),
            department: department.to_owned(),
        };
        lecturers.push(lecturer.clone());
        self.store.save_lecturers(&lecturers).await?;
        Ok(lecturer)
    }

    /// Read the lecturer collection in creation order.
    pub async fn list_lecturers(&self) -> Result<Vec<Lecturer>, Error> {
        Ok(self.store.load_lecturers().await?)
    }

    /// Submit an evaluation after referential and range checks.
    ///
    /// Checks run in field-declaration order: user existence, lecturer
    /// existence, then rating range.
    pub async fn submit_evaluation(&self, request: NewEvaluation) -> Result<Evaluation, Error> {
        let users = self.store.load_users().await?;
        if !users
            .iter()
            .any(|user| user.index.as_ref() == request.user_index)
        {
            return Err(Error::not_found("User not found"));
        }

        let lecturers = self.store.load_lecturers().await?;
        if !lecturers
            .iter()
            .any(|lecturer| lecturer.id.as_ref() == request.lecturer_id)
        {
            return Err(Error::not_found("Lecturer not found"));
        }

        let rating =
            Rating::new(request.rating).map_err(|err| Error::out_of_range(err.to_string()))?;

        let mut evaluations = self.store.load_evaluations().await?;
        let evaluation = Evaluation {
            user_index: request.user_index,
            lecturer_id: request.lecturer_id,
            rating,
            comments: request.comments,
        };
        evaluations.push(evaluation.clone());
        self.store.save_evaluations(&evaluations).await?;
        Ok(evaluation)
    }

    /// Read the evaluation collection in submission order.
    pub async fn list_evaluations(&self) -> Result<Vec<Evaluation>, Error> {
        Ok(self.store.load_evaluations().await?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::InMemoryStore;

    fn service() -> RecordsService {
        RecordsService::new(Arc::new(InMemoryStore::new()))
    }

    fn evaluation_request(user_index: &str, lecturer_id: &str, rating: i64) -> NewEvaluation {
        NewEvaluation {
            user_index: user_index.to_owned(),
            lecturer_id: lecturer_id.to_owned(),
            rating,
            comments: None,
        }
    }

    #[tokio::test]
    async fn registrations_assign_sequential_indices() {
        let records = service();
        for (position, email) in ["a@x.com", "b@x.com", "c@x.com"].into_iter().enumerate() {
            let user = records
                .register_user("someone", email)
                .await
                .expect("registration succeeds");
            assert_eq!(user.index, UserIndex::for_position(position + 1));
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_persisting() {
        let records = service();
        records
            .register_user("Ada", "ada@x.com")
            .await
            .expect("first registration succeeds");

        let err = records
            .register_user("Imposter", "ada@x.com")
            .await
            .expect_err("second registration fails");
        assert_eq!(err.code, ErrorCode::DuplicateEntity);

        // A later registration still gets position 2.
        let user = records
            .register_user("Bob", "bob@x.com")
            .await
            .expect("registration succeeds");
        assert_eq!(user.index.as_ref(), "0002");
    }

    #[tokio::test]
    async fn duplicate_check_is_case_sensitive() {
        let records = service();
        records
            .register_user("Ada", "ada@x.com")
            .await
            .expect("first registration succeeds");
        records
            .register_user("Ada", "Ada@x.com")
            .await
            .expect("differently cased email registers");
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let records = service();
        let err = records
            .register_user("Ada", "not-an-email")
            .await
            .expect_err("registration fails");
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn lecturers_assign_prefixed_sequential_ids() {
        let records = service();
        let first = records
            .add_lecturer("Dr. X", "CS")
            .await
            .expect("lecturer added");
        let second = records
            .add_lecturer("Dr. Y", "Maths")
            .await
            .expect("lecturer added");
        assert_eq!(first.id.as_ref(), "L0001");
        assert_eq!(second.id.as_ref(), "L0002");
    }

    #[tokio::test]
    async fn listed_lecturers_appear_in_creation_order() {
        let records = service();
        let first = records
            .add_lecturer("Dr. X", "CS")
            .await
            .expect("lecturer added");
        let second = records
            .add_lecturer("Dr. Y", "Maths")
            .await
            .expect("lecturer added");
        assert_eq!(
            records.list_lecturers().await.expect("list lecturers"),
            vec![first, second]
        );
    }

    #[tokio::test]
    async fn evaluation_requires_existing_user() {
        let records = service();
        records
            .add_lecturer("Dr. X", "CS")
            .await
            .expect("lecturer added");

        let err = records
            .submit_evaluation(evaluation_request("0001", "L0001", 5))
            .await
            .expect_err("submission fails");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "User not found");
        assert!(
            records
                .list_evaluations()
                .await
                .expect("list evaluations")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn evaluation_requires_existing_lecturer() {
        let records = service();
        records
            .register_user("Ada", "ada@x.com")
            .await
            .expect("registration succeeds");

        let err = records
            .submit_evaluation(evaluation_request("0001", "L0001", 5))
            .await
            .expect_err("submission fails");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Lecturer not found");
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[tokio::test]
    async fn evaluation_rejects_out_of_range_ratings(#[case] rating: i64) {
        let records = service();
        records
            .register_user("Ada", "ada@x.com")
            .await
            .expect("registration succeeds");
        records
            .add_lecturer("Dr. X", "CS")
            .await
            .expect("lecturer added");

        let err = records
            .submit_evaluation(evaluation_request("0001", "L0001", rating))
            .await
            .expect_err("submission fails");
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(
            records
                .list_evaluations()
                .await
                .expect("list evaluations")
                .is_empty()
        );
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[tokio::test]
    async fn evaluation_accepts_boundary_ratings(#[case] rating: i64) {
        let records = service();
        records
            .register_user("Ada", "ada@x.com")
            .await
            .expect("registration succeeds");
        records
            .add_lecturer("Dr. X", "CS")
            .await
            .expect("lecturer added");

        let evaluation = records
            .submit_evaluation(evaluation_request("0001", "L0001", rating))
            .await
            .expect("submission succeeds");
        assert_eq!(i64::from(evaluation.rating), rating);
    }

    #[tokio::test]
    async fn full_scenario_round_trips_in_order() {
        let records = service();
        let alice = records
            .register_user("Alice", "a@x.com")
            .await
            .expect("registration succeeds");
        assert_eq!(alice.index.as_ref(), "0001");

        let bob = records
            .register_user("Bob", "b@x.com")
            .await
            .expect("registration succeeds");
        assert_eq!(bob.index.as_ref(), "0002");

        let lecturer = records
            .add_lecturer("Dr. X", "CS")
            .await
            .expect("lecturer added");
        assert_eq!(lecturer.id.as_ref(), "L0001");

        let submitted = records
            .submit_evaluation(NewEvaluation {
                user_index: "0001".to_owned(),
                lecturer_id: "L0001".to_owned(),
                rating: 5,
                comments: Some("excellent".to_owned()),
            })
            .await
            .expect("submission succeeds");

        let listed = records.list_evaluations().await.expect("list evaluations");
        assert_eq!(listed, vec![submitted]);
    }
}
