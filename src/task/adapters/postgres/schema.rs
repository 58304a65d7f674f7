//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional free-form notes.
        notes -> Nullable<Text>,
        /// Serialized enhancement payload.
        enhanced_description -> Nullable<Text>,
        /// Whether the enhancement text is unmodified AI output.
        is_ai_generated -> Bool,
        /// Completion status.
        #[max_length = 16]
        status -> Varchar,
        /// Priority from 1 (high) to 3 (low).
        priority -> Nullable<Int2>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
