//! Diesel schema for assignment persistence.

diesel::table! {
    /// Projects that own members and tasks.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Project members with skills and workload.
    project_members (id) {
        /// Member identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional notification address.
        #[max_length = 255]
        email -> Nullable<Varchar>,
        /// Skill name to proficiency map.
        skills -> Jsonb,
        /// Open-task count.
        workload -> Int4,
        /// Optional availability flag.
        available -> Nullable<Bool>,
        /// Insertion sequence, defining roster order.
        roster_position -> Int8,
    }
}

diesel::table! {
    /// Tasks with their selected assignee.
    assigned_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Selected member.
        assigned_to -> Uuid,
        /// Task description payload.
        request -> Jsonb,
        /// Assignment score in hundredths of a point.
        score -> Int4,
        /// Assignment rationale.
        rationale -> Text,
        /// Task lifecycle state.
        #[max_length = 50]
        state -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(project_members -> projects (project_id));
diesel::joinable!(assigned_tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, project_members, assigned_tasks);
