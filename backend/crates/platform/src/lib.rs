//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, random bytes)
//! - Password hashing (Argon2id) with a configurable policy
//! - Bearer credential extraction from request headers

pub mod bearer;
pub mod crypto;
pub mod password;
