/// Returns the smallest of three values.
///
/// Both distance variants use this to pick the cheapest of the three
/// edit primitives at a mismatch cell.
fn min3(x: usize, y: usize, z: usize) -> usize {
    x.min(y).min(z)
}

/// Computes the Levenshtein (edit) distance between `a` and `b` with a
/// full dynamic programming table.
///
/// The Levenshtein distance is the minimum number of single-character
/// edits (insertions, deletions, substitutions) required to change `a`
/// into `b`. The table has `m + 1` rows indexing prefixes of `b` and
/// `n + 1` columns indexing prefixes of `a`; `table[i][j]` holds the
/// distance between the first `j` characters of `a` and the first `i`
/// characters of `b`, so the bottom-right cell is the answer.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_matrix;
///
/// assert_eq!(levenshtein_matrix("", ""), 0);
/// assert_eq!(levenshtein_matrix("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_matrix("horse", "ros"), 3);
/// ```
pub fn levenshtein_matrix(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = a.len();
    let m = b.len();

    let mut table = vec![vec![0_usize; n + 1]; m + 1];

    // Base cases: transforming between a prefix and the empty string
    // costs one operation per character.
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            if a[j - 1] == b[i - 1] {
                // Matching characters align for free.
                table[i][j] = table[i - 1][j - 1];
            } else {
                // The recurrence at a mismatch:
                //   table[i][j-1]   + 1  (insertion)
                //   table[i-1][j-1] + 1  (substitution)
                //   table[i-1][j]   + 1  (deletion)
                let insert = table[i][j - 1];
                let replace = table[i - 1][j - 1];
                let delete = table[i - 1][j];
                table[i][j] = 1 + min3(insert, replace, delete);
            }
        }
    }

    table[m][n]
}

/// Computes the same distance as [`levenshtein_matrix`] using a two-row
/// rolling buffer.
///
/// Row `i % 2` is rebuilt from row `(i - 1) % 2` on each outer
/// iteration; the column-0 base case is re-derived per row since no
/// persistent first column exists. Memory use drops from the full table
/// to two rows while the result stays identical for every input.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_rolling;
///
/// assert_eq!(levenshtein_rolling("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_rolling("", "abcdef"), 6);
/// ```
pub fn levenshtein_rolling(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = a.len();
    let m = b.len();

    let mut rows = [vec![0_usize; n + 1], vec![0_usize; n + 1]];

    // Row 0 is the same base row the full table starts from; at i = 1
    // the "previous row" read below is exactly this row.
    for (j, cell) in rows[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 0..=n {
            rows[i % 2][j] = if j == 0 {
                // Re-seeded base column value for this row.
                i
            } else if a[j - 1] == b[i - 1] {
                rows[(i - 1) % 2][j - 1]
            } else {
                let insert = rows[i % 2][j - 1];
                let replace = rows[(i - 1) % 2][j - 1];
                let delete = rows[(i - 1) % 2][j];
                1 + min3(insert, replace, delete)
            };
        }
    }

    rows[m % 2][n]
}
