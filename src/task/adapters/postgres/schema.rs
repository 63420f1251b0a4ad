//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to their owning user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Short task summary.
        #[max_length = 255]
        title -> Varchar,
        /// Longer task description.
        description -> Text,
        /// Lifecycle status in canonical string form.
        #[max_length = 50]
        status -> Varchar,
        /// Identifier of the owning user.
        owner_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
