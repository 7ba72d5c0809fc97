//! Utility functions for JWT decoding

pub mod base64url;
