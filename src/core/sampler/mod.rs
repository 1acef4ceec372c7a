//! # 샘플러
//!
//! 가시 → 은닉 / 은닉 → 가시 투영과 지속 깁스 체인

pub mod daydream;
pub mod projection;

pub use daydream::DreamChain;
