//! Binary max-heap sort.
//!
//! Build phase: sift down every internal node, last parent first, so both
//! subtrees of a node are already heaps when the node itself is sifted.
//! Extraction phase: move the root to the end of the active region, shrink
//! the region by one and restore the heap from the root.

/// Sort `data` ascending in place and hand the slice back.
pub fn heap_sort<T: PartialOrd>(data: &mut [T]) -> &mut [T] {
    build_max_heap(data);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
    data
}

/// Rearrange `data` into a max-heap.
///
/// Inputs shorter than two elements have no internal nodes and are left alone.
pub fn build_max_heap<T: PartialOrd>(data: &mut [T]) {
    let len = data.len();
    for idx in (0..len / 2).rev() {
        sift_down(data, len, idx);
    }
}

/// Restore the max-heap property below `idx` within `heap[..heap_size]`.
///
/// Keeps descending along the swapped path until the node is at least as
/// large as both children or has none.
pub fn sift_down<T: PartialOrd>(heap: &mut [T], heap_size: usize, mut idx: usize) {
    loop {
        let left = 2 * idx + 1;
        let right = left + 1;
        let mut largest = idx;

        if left < heap_size && heap[left] > heap[largest] {
            largest = left;
        }
        if right < heap_size && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == idx {
            break;
        }

        heap.swap(idx, largest);
        idx = largest;
    }
}

/// Whether `data` satisfies the max-heap property.
#[must_use]
pub fn is_max_heap<T: PartialOrd>(data: &[T]) -> bool {
    (1..data.len()).all(|i| data[(i - 1) / 2] >= data[i])
}
