//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Left rotation of the unscanned tail of an argument vector.

/// Move the first element of `window` to its end, shifting every other
/// element left by one.
pub fn rotate_front<T>(window: &mut [T]) {
    if window.len() > 1 {
        window.rotate_left(1);
    }
}

/// Same as calling [`rotate_front`] `n` times, in a single pass.
pub fn rotate_front_n<T>(window: &mut [T], n: usize) {
    let n = n.min(window.len());
    if n > 0 {
        window.rotate_left(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_moves_to_back() {
        let mut v = ["a", "b", "c", "d"];
        rotate_front(&mut v);
        assert_eq!(v, ["b", "c", "d", "a"]);
    }

    #[test]
    fn short_windows_are_untouched() {
        let mut empty: [&str; 0] = [];
        rotate_front(&mut empty);

        let mut one = ["a"];
        rotate_front(&mut one);
        assert_eq!(one, ["a"]);
    }

    #[test]
    fn bulk_rotation_matches_repeated_single() {
        let mut bulk = ["x", "y", "z", "d1", "d2"];
        let mut single = bulk;

        rotate_front_n(&mut bulk, 3);
        for _ in 0..3 {
            rotate_front(&mut single);
        }
        assert_eq!(bulk, single);
        assert_eq!(bulk, ["d1", "d2", "x", "y", "z"]);
    }

    #[test]
    fn bulk_rotation_clamps() {
        let mut v = ["a", "b"];
        rotate_front_n(&mut v, 7);
        assert_eq!(v, ["a", "b"]);
    }
}
