//! Buddy Index
//!
//! Power-of-two range allocator over a fixed logical address space.
//! Tracks which sub-blocks of a slab are free; owns no bytes itself.
//!
//! # Architecture
//!
//! ```text
//! BuddyIndex (S = 8)
//!   tree (level order, 2S-1 nodes, each = largest free block in its range)
//!
//!                 [8]                ← whole slab
//!             [4]     [4]
//!           [2] [2] [2] [2]
//!          [1][1][1][1][1][1][1][1]  ← one leaf per byte offset
//!
//!   reserve(3) → round up to 4, descend left-first, mark node 0:
//!
//!                 [4]
//!             [0]     [4]            ← offset 0 .. 4 taken
//!           [2] [2] [2] [2]
//! ```
//!
//! A node holding `0` is an allocation site; freeing it restores the node
//! and coalesces with its buddy whenever both halves are whole again.

pub mod index;

pub use index::{round_up_pow2, BuddyIndex};
