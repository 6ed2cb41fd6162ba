//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after adding a migration.

diesel::table! {
    /// Registered users.
    ///
    /// `id` is a serial primary key assigned by the store on insert.
    users (id) {
        /// Primary key issued by the `users_id_seq` sequence.
        id -> Int4,
        /// User name; not unique.
        name -> Varchar,
        /// Contact email; uniqueness is left to optional schema constraints.
        email -> Varchar,
    }
}
