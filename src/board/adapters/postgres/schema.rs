//! Diesel schema for board persistence.

diesel::table! {
    /// Projects owned by verified callers.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Owner identity.
        #[max_length = 255]
        owner -> Varchar,
        /// Project name, unique per owner.
        #[max_length = 255]
        name -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Columns chained within their project.
    board_columns (id) {
        /// Column identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Column name, unique per project ignoring case.
        #[max_length = 255]
        name -> Varchar,
        /// Preceding column in the project chain.
        predecessor_id -> Nullable<Uuid>,
        /// Following column in the project chain.
        successor_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks chained within their column.
    board_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning column.
        column_id -> Uuid,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Preceding task in the column chain.
        predecessor_id -> Nullable<Uuid>,
        /// Following task in the column chain.
        successor_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(board_columns -> projects (project_id));
diesel::joinable!(board_tasks -> board_columns (column_id));
diesel::allow_tables_to_appear_in_same_query!(projects, board_columns, board_tasks);
