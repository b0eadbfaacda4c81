//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, constant-time comparison)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Cookie management
//! - Client identification helpers

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
