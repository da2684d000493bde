use itertools::Itertools;
use ndarray::{Array2, Axis};

use crate::utils::base_utils::BaseUtils;
use crate::utils::errors::ConsensusError;

/// Where an MSA column sits on the reference. Insertion columns share the
/// reference position of the column they were inserted before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsaColumn {
    pub ref_pos: i64,
    pub is_insertion: bool,
}

impl MsaColumn {
    pub fn reference(ref_pos: i64) -> Self {
        Self {
            ref_pos,
            is_insertion: false,
        }
    }

    pub fn insertion(ref_pos: i64) -> Self {
        Self {
            ref_pos,
            is_insertion: true,
        }
    }
}

/**
 * The rectangular multiple sequence alignment of one cluster together with
 * its per-cell qualities and per-read strands.
 *
 * All three matrices share shape `num_reads x num_columns`. Cell values of
 * `msa` are the numeric base codes, `7` marking cells outside a read's
 * projected span. Quality is zero wherever the base is a gap or padding.
 * The matrices are built once and then mutated only through the transforms
 * below, which keep `columns` and `num_pass_per_column` in sync.
 */
#[derive(Debug, Clone)]
pub struct AlignmentInfo {
    pub msa: Array2<u8>,
    pub qscores: Array2<u8>,
    pub strands: Array2<u8>,
    pub columns: Vec<MsaColumn>,
    pub num_pass_per_column: Vec<usize>,
    pub effective_num_pass: usize,
}

impl AlignmentInfo {
    pub fn new(
        msa: Array2<u8>,
        qscores: Array2<u8>,
        strands: Array2<u8>,
        columns: Vec<MsaColumn>,
    ) -> Self {
        let effective_num_pass = msa.nrows();
        let mut info = Self {
            msa,
            qscores,
            strands,
            columns,
            num_pass_per_column: Vec::new(),
            effective_num_pass,
        };
        info.recount_passes();
        info
    }

    pub fn num_reads(&self) -> usize {
        self.msa.nrows()
    }

    pub fn num_columns(&self) -> usize {
        self.msa.ncols()
    }

    /// First reference position still covered by a non-insertion column.
    pub fn reference_start(&self) -> i64 {
        self.columns
            .iter()
            .find(|column| !column.is_insertion)
            .map(|column| column.ref_pos)
            .unwrap_or(0)
    }

    /// One past the last covered reference position.
    pub fn reference_end(&self) -> i64 {
        self.columns
            .iter()
            .rev()
            .find(|column| !column.is_insertion)
            .map(|column| column.ref_pos + 1)
            .unwrap_or(0)
    }

    /// Counts of `[gap, A, C, G, T]` among the non-padding cells of a column.
    pub fn column_base_counts(&self, column: usize) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for cell in self.msa.column(column).iter() {
            if *cell != BaseUtils::PADDING {
                counts[*cell as usize] += 1;
            }
        }
        counts
    }

    pub fn recount_passes(&mut self) {
        self.num_pass_per_column = (0..self.msa.ncols())
            .map(|column| {
                self.msa
                    .column(column)
                    .iter()
                    .filter(|cell| **cell != BaseUtils::PADDING)
                    .count()
            })
            .collect();
    }

    fn column_called_bases(&self, column: usize) -> usize {
        self.msa
            .column(column)
            .iter()
            .filter(|cell| BaseUtils::is_base(**cell))
            .count()
    }

    /**
     * Drop leading and trailing columns that carry no called base, either
     * because nothing covers them or because every covering read deleted
     * the position.
     */
    pub fn trim_alignment_info(&mut self) {
        let mut first = 0;
        let mut last = self.num_columns();
        while first < last && self.column_called_bases(first) == 0 {
            first += 1;
        }
        while last > first && self.column_called_bases(last - 1) == 0 {
            last -= 1;
        }
        if first > 0 || last < self.num_columns() {
            let doomed = (0..first).chain(last..self.num_columns()).collect::<Vec<usize>>();
            self.remove_columns_at(&doomed);
        }
    }

    /**
     * Delete every full-depth column in which gap holds a (tie favouring)
     * majority of the non-padding cells. Columns below full depth are left
     * alone, those are the insertion columns partial reads never reached
     * and deleting them would erase a real insertion.
     */
    pub fn delete_gap_major_columns(&mut self) {
        let max_pass = self.num_pass_per_column.iter().max().copied().unwrap_or(0);
        let doomed = (0..self.num_columns())
            .filter(|column| {
                let num_pass = self.num_pass_per_column[*column];
                if num_pass != max_pass {
                    return false;
                }
                let gap_count = self.column_base_counts(*column)[BaseUtils::GAP as usize];
                gap_count > 0 && 2 * gap_count >= num_pass
            })
            .collect::<Vec<usize>>();
        if !doomed.is_empty() {
            self.remove_columns_at(&doomed);
        }
    }

    /**
     * Drop rows that contributed no called base, typically reads whose
     * whole span fell outside the trimmed column frame. Errors with
     * DegenerateCluster when nothing is left.
     */
    pub fn remove_empty_reads(&mut self) -> Result<usize, ConsensusError> {
        let doomed = (0..self.num_reads())
            .filter(|row| {
                self.msa
                    .row(*row)
                    .iter()
                    .all(|cell| !BaseUtils::is_base(*cell))
            })
            .collect::<Vec<usize>>();
        if doomed.len() == self.num_reads() {
            return Err(ConsensusError::DegenerateCluster);
        }
        let removed = doomed.len();
        if removed > 0 {
            self.remove_rows_at(&doomed);
        }
        Ok(removed)
    }

    /**
     * The cluster depth used downstream, the mode of the per-column pass
     * counts over the interior. Boundary columns reached by fewer than half
     * the deepest column's reads are excluded, ties resolve to the larger
     * count.
     */
    pub fn set_effective_num_pass(&mut self) {
        let max_pass = self.num_pass_per_column.iter().max().copied().unwrap_or(0);
        self.effective_num_pass = self
            .num_pass_per_column
            .iter()
            .copied()
            .filter(|num_pass| 2 * num_pass >= max_pass)
            .counts()
            .into_iter()
            .max_by_key(|(num_pass, count)| (*count, *num_pass))
            .map(|(num_pass, _)| num_pass)
            .unwrap_or(0);
    }

    pub fn remove_columns_at(&mut self, columns: &[usize]) {
        self.msa = Self::remove_columns(&self.msa, columns);
        self.qscores = Self::remove_columns(&self.qscores, columns);
        self.strands = Self::remove_columns(&self.strands, columns);
        self.columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|(index, _)| !columns.contains(index))
            .map(|(_, column)| *column)
            .collect();
        self.recount_passes();
    }

    pub fn remove_rows_at(&mut self, rows: &[usize]) {
        self.msa = Self::remove_rows(&self.msa, rows);
        self.qscores = Self::remove_rows(&self.qscores, rows);
        self.strands = Self::remove_rows(&self.strands, rows);
        self.recount_passes();
    }

    /// Indices of columns where any read contributes a called base.
    pub fn get_non_empty_columns(msa: &Array2<u8>) -> Vec<usize> {
        (0..msa.ncols())
            .filter(|column| msa.column(*column).iter().any(|cell| BaseUtils::is_base(*cell)))
            .collect()
    }

    /// Columns of `[start, end]` where at least two reads call a base.
    pub fn get_more_than_one_pass_columns(
        msa: &Array2<u8>,
        start: usize,
        end: usize,
    ) -> Vec<usize> {
        (start..=end.min(msa.ncols() - 1))
            .filter(|column| {
                msa.column(*column)
                    .iter()
                    .filter(|cell| BaseUtils::is_base(**cell))
                    .count()
                    > 1
            })
            .collect()
    }

    /**
     * Columns of `[start, end]` with enough called bases to trust. With a
     * nonzero `full_read_size` the bar is that many bases, otherwise a
     * strict majority of the column's passes.
     */
    pub fn get_non_gap_columns(
        msa: &Array2<u8>,
        full_read_size: usize,
        start: usize,
        end: usize,
    ) -> Vec<usize> {
        (start..=end.min(msa.ncols() - 1))
            .filter(|column| {
                let num_pass = msa
                    .column(*column)
                    .iter()
                    .filter(|cell| **cell != BaseUtils::PADDING)
                    .count();
                let called = msa
                    .column(*column)
                    .iter()
                    .filter(|cell| BaseUtils::is_base(**cell))
                    .count();
                let threshold = if full_read_size > 0 {
                    full_read_size
                } else {
                    num_pass / 2 + 1
                };
                called > 0 && called >= threshold
            })
            .collect()
    }

    /// Columns where gap holds a tie-favouring majority of the passes.
    pub fn get_gap_major_columns(msa: &Array2<u8>) -> Vec<usize> {
        (0..msa.ncols())
            .filter(|column| {
                let mut num_pass = 0;
                let mut gap_count = 0;
                for cell in msa.column(*column).iter() {
                    if *cell != BaseUtils::PADDING {
                        num_pass += 1;
                        if *cell == BaseUtils::GAP {
                            gap_count += 1;
                        }
                    }
                }
                gap_count > 0 && 2 * gap_count >= num_pass
            })
            .collect()
    }

    pub fn remove_rows(matrix: &Array2<u8>, rows: &[usize]) -> Array2<u8> {
        let kept = (0..matrix.nrows())
            .filter(|row| !rows.contains(row))
            .collect::<Vec<usize>>();
        matrix.select(Axis(0), &kept)
    }

    pub fn remove_columns(matrix: &Array2<u8>, columns: &[usize]) -> Array2<u8> {
        let kept = (0..matrix.ncols())
            .filter(|column| !columns.contains(column))
            .collect::<Vec<usize>>();
        matrix.select(Axis(1), &kept)
    }
}
