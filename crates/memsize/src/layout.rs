//! Fixed handle costs.
//!
//! These are approximations of how much room a handle takes inside whatever
//! holds it. They are deliberately independent of the exact standard library
//! layout so that totals stay comparable across toolchains.

pub const POINTER_BYTE_SIZE: usize = if cfg!(target_pointer_width = "16") {
    2
} else if cfg!(target_pointer_width = "32") {
    4
} else {
    8
};

/// Data pointer and length.
pub const STRING_HEADER_BYTES: usize = 2 * POINTER_BYTE_SIZE;

/// Data pointer, length and capacity.
pub const SEQUENCE_HEADER_BYTES: usize = 3 * POINTER_BYTE_SIZE;

/// Data pointer and length of a borrowed or boxed slice.
pub const SLICE_HEADER_BYTES: usize = 2 * POINTER_BYTE_SIZE;

/// Data pointer and vtable.
pub const DYNAMIC_HANDLE_BYTES: usize = 2 * POINTER_BYTE_SIZE;
