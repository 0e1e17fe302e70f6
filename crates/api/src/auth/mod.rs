//! Authentication primitives: JWT issuing/validation, Argon2id password
//! hashing, OTP generation, and the session cache abstraction.

pub mod jwt;
pub mod otp;
pub mod password;
pub mod session;
