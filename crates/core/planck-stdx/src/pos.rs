//! Logical-position arithmetic for the ring buffer engine.
//!
//! The engine never stores physical indices. Its `head` and `tail` cursors are
//! signed logical positions that drift freely as elements are pushed and
//! popped at either end; the functions here fold such a position back into a
//! slot of the fixed backing array.

/// Integer type used for logical positions.
pub type Position = i32;

/// Largest capacity a ring-backed container may be instantiated with.
///
/// Keeps `N` far enough from the [`Position`] range that cursor offsets of up
/// to a few multiples of `N` can never wrap.
pub const CAPACITY_LIMIT: usize = (Position::MAX / 4) as usize;

/// Maps a logical position onto a physical slot in `[0, capacity)`.
///
/// Non-negative positions map as `pos % capacity`. Negative positions (which
/// arise from `push_front` and from walking a cursor backwards past the
/// origin) map as `capacity - 1 - ((-pos - 1) % capacity)`, so stepping from
/// `0` to `-1` lands on the last slot, exactly as an unsigned wrap would.
///
/// The function is total over [`Position`]; `-(pos + 1)` cannot overflow even
/// for `Position::MIN`.
///
/// # Panics
///
/// Panics if `capacity` is zero or larger than [`CAPACITY_LIMIT`]. Containers
/// reject both at compile time.
///
/// # Examples
///
/// ```
/// use planck_stdx::pos::physical_slot;
///
/// assert_eq!(physical_slot(0, 4), 0);
/// assert_eq!(physical_slot(5, 4), 1);
/// assert_eq!(physical_slot(-1, 4), 3);
/// assert_eq!(physical_slot(-4, 4), 0);
/// assert_eq!(physical_slot(-5, 4), 3);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn physical_slot(pos: Position, capacity: usize) -> usize {
    assert!(capacity > 0 && capacity <= CAPACITY_LIMIT, "invalid ring capacity");
    let cap = capacity as Position;
    if pos >= 0 {
        (pos % cap) as usize
    } else {
        (cap - 1 - ((-(pos + 1)) % cap)) as usize
    }
}

/// Returns true when either cursor has come within `capacity` of the end of
/// the [`Position`] range and must be re-centered before the next step.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn is_near_overflow(head: Position, tail: Position, capacity: usize) -> bool {
    let cap = capacity as Position;
    head <= Position::MIN + cap || tail >= Position::MAX - cap
}
