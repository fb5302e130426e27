use core::{cmp::Ordering, mem};

/// Sorts `slice` in place with a Hoare-partitioning quicksort.
///
/// The pivot is the element in the middle of each range (rounding towards the front). The pivot's value is
/// followed through swaps rather than copied out, so `T` does not need to be [`Clone`].
///
/// Each partition sees the same comparisons however the partitions are scheduled; the smaller side is recursed
/// into and the larger side is looped over, keeping the stack depth logarithmic.
pub fn quick_sort<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let (left, right_end) = partition(slice, compare);

        // `right_end` is one past the last element of the front range, `left` is the first element of the
        // back range. Ranges of one element are already sorted.
        let sort_front = right_end > 1;
        let sort_back = left < slice.len() - 1;

        let (front, rest) = mem::take(&mut slice).split_at_mut(right_end);
        let back = &mut rest[left - right_end..];

        match (sort_front, sort_back) {
            (false, false) => return,
            (true, false) => slice = front,
            (false, true) => slice = back,
            (true, true) => {
                if front.len() < back.len() {
                    quick_sort(front, compare);
                    slice = back;
                } else {
                    quick_sort(back, compare);
                    slice = front;
                }
            }
        }
    }
}

/// Partitions `slice` (of at least two elements) around its middle element.
///
/// Returns `(left, right_end)`: everything in `..right_end` compares no greater than the pivot, everything in
/// `left..` compares no less, and `right_end <= left`.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(slice.len() > 1);

    let mut pivot = (slice.len() - 1) / 2;
    let mut left = 0;
    // Exclusive, so the cursor can pass the front without underflowing
    let mut right_end = slice.len();

    while left < right_end {
        // The pivot value stops both scans, so neither can leave the slice under a total order
        while compare(&slice[left], &slice[pivot]) == Ordering::Less {
            left += 1;
        }
        while compare(&slice[right_end - 1], &slice[pivot]) == Ordering::Greater {
            right_end -= 1;
        }

        if left < right_end {
            let right = right_end - 1;
            slice.swap(left, right);
            if pivot == left {
                pivot = right;
            } else if pivot == right {
                pivot = left;
            }

            left += 1;
            right_end -= 1;
        }
    }

    debug_assert!(right_end <= left);
    (left, right_end)
}
