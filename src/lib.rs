//! This crate implements the TLSF (Two-Level Segregated Fit) dynamic memory
//! allocation algorithm¹.
//!
//!  - **Allocation and deallocation operations are guaranteed to complete in
//!    constant time.** TLSF is suitable for real-time applications.
//!
//!  - **The memory pool is provided by an application.** Examples of
//!    potential memory pool sources include: a `static` array for global
//!    memory allocation, a memory block allocated by another memory
//!    allocator for arena allocation.
//!
//!  - **This crate supports `#![no_std]`.** It can be used in bare-metal and
//!    RTOS-based applications. Enable the `std` feature for the optional
//!    [`GlobalTlsf`] convenience wrapper.
//!
//! <sub>¹ M. Masmano, I. Ripoll, A. Crespo and J. Real, "TLSF: a new dynamic
//! memory allocator for real-time systems," *Proceedings. 16th Euromicro
//! Conference on Real-Time Systems*, 2004. ECRTS 2004., Catania, Italy, 2004,
//! pp. 79-88, doi: 10.1109/EMRTS.2004.1311009.</sub>
//!
//! # Example
//!
//! ```rust
//! use tlsf::Tlsf;
//! use std::mem::MaybeUninit;
//!
//! let mut pool = [MaybeUninit::uninit(); 65536];
//! let mut tlsf = Tlsf::new();
//! tlsf.add_pool(&mut pool);
//!
//! let ptr = tlsf.malloc(64).unwrap();
//! unsafe {
//!     tlsf.free(Some(ptr));
//! }
//! ```
//!
//! # Design
//!
//! The end of each memory pool is capped by a sentinel block (a
//! permanently-used, zero-size block) instead of a flag on the last real
//! block. This removes the "is this the last block" branch from every
//! split/merge path.
#![no_std]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

mod int;
mod tlsf;
mod utils;

pub use self::tlsf::{Tlsf, ALIGN_SIZE, BLOCK_SIZE_MAX, BLOCK_SIZE_MIN};

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
mod global;

#[cfg(feature = "std")]
pub use self::global::GlobalTlsf;

#[cfg(any(test, feature = "std"))]
extern crate std;
