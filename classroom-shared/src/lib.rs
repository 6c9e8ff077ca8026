#![cfg_attr(not(test), forbid(unsafe_code))]

//! Wire models exchanged between the Classroom client and its REST backend.
//!
//! Field names follow the backend's JSON (camelCase, Mongo-style `_id`), so
//! every type here can be sent or received without an intermediate mapping.

pub mod models;
