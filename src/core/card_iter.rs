/// Iterator over every `k` sized subset of a slice.
///
/// Subsets keep the relative order of the input, and come out in
/// lexicographic index order: the first item paired with every subset
/// of the items after it, then the second item, and so on. For seven
/// cards and `k = 5` that is the 21 five card hands.
#[derive(Debug, Clone)]
pub struct CardIter<'a, T> {
    // All the possible items that can be picked
    possible: &'a [T],

    // Set of current offsets being used to create subsets.
    idx: Vec<usize>,

    // Has the first subset been handed out yet?
    started: bool,

    // No more subsets.
    done: bool,
}

impl<'a, T: Clone> CardIter<'a, T> {
    /// Create an iterator over all `num_items` sized subsets of `possible`.
    ///
    /// Asking for zero items or more items than there are yields nothing.
    pub fn new(possible: &'a [T], num_items: usize) -> Self {
        CardIter {
            possible,
            idx: (0..num_items).collect(),
            started: false,
            done: num_items == 0 || num_items > possible.len(),
        }
    }

    fn current(&self) -> Vec<T> {
        self.idx.iter().map(|i| self.possible[*i].clone()).collect()
    }
}

impl<T: Clone> Iterator for CardIter<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let n = self.possible.len();
        let k = self.idx.len();

        // Find the right most offset that can still move forward and leave
        // enough items after it to fill out the rest of the subset.
        let mut level = k;
        loop {
            if level == 0 {
                self.done = true;
                return None;
            }
            level -= 1;
            if self.idx[level] < n - k + level {
                break;
            }
        }

        self.idx[level] += 1;
        for next in (level + 1)..k {
            self.idx[next] = self.idx[next - 1] + 1;
        }
        Some(self.current())
    }
}

/// Collect every `k` sized subset of `items`, see [`CardIter`].
///
/// ```
/// use hand_trainer::core::combinations;
///
/// let subsets = combinations(&[1, 2, 3, 4], 3);
/// assert_eq!(
///     vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]],
///     subsets
/// );
/// assert_eq!(21, combinations(&[0; 7], 5).len());
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    CardIter::new(items, k).collect()
}

/// Offsets of every five card subset of seven cards, in the same order
/// `CardIter` hands them out.
pub(crate) const FIVE_OF_SEVEN: [[usize; 5]; 21] = five_of_seven();

const fn five_of_seven() -> [[usize; 5]; 21] {
    let mut out = [[0; 5]; 21];
    let mut n = 0;
    let mut a = 0;
    while a < 7 {
        let mut b = a + 1;
        while b < 7 {
            let mut c = b + 1;
            while c < 7 {
                let mut d = c + 1;
                while d < 7 {
                    let mut e = d + 1;
                    while e < 7 {
                        out[n] = [a, b, c, d, e];
                        n += 1;
                        e += 1;
                    }
                    d += 1;
                }
                c += 1;
            }
            b += 1;
        }
        a += 1;
    }
    out
}
