use std::collections::{BTreeMap, HashMap};

use ndarray::Array2;
use rust_htslib::bam::record::Cigar;

use crate::msa::alignment_info::{AlignmentInfo, MsaColumn};
use crate::reads::read_record::ReadRecord;
use crate::utils::base_utils::BaseUtils;
use crate::utils::errors::ConsensusError;

// one read flattened onto the reference frame
struct ProjectedRead {
    // (reference position, base code, quality) for every M and D cell
    cells: Vec<(i64, u8, u8)>,
    // insertion events keyed by the reference column they precede
    insertions: Vec<(i64, Vec<u8>, Vec<u8>)>,
    start: i64,
    end: i64,
    is_reverse: bool,
}

/**
 * Builds the rectangular `AlignmentInfo` of a cluster from its aligned
 * reads.
 *
 * Reads are projected row by row onto a shared reference frame, insertion
 * events at the same anchor are merged into a shared left-aligned column
 * window, columns in which no read calls a base are dropped, and boundary
 * columns covered by a single read are trimmed away. The soft clip policy
 * defaults to stripping clips before projection; with `remove_soft_clips`
 * off the clipped bases are projected at their unclipped positions instead.
 */
pub struct MsaBuilder {
    pub remove_soft_clips: bool,
}

impl Default for MsaBuilder {
    fn default() -> Self {
        Self {
            remove_soft_clips: true,
        }
    }
}

impl MsaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&self, reads: &[ReadRecord]) -> Result<AlignmentInfo, ConsensusError> {
        if reads.is_empty() {
            return Err(ConsensusError::EmptyCluster);
        }

        let mut projected = Vec::with_capacity(reads.len());
        for read in reads {
            read.validate()?;
            match self.project_read(read)? {
                Some(row) => projected.push(row),
                None => {
                    debug!("read {} is fully soft clipped, discarding", read.name);
                }
            }
        }
        if projected.is_empty() {
            return Err(ConsensusError::DegenerateCluster);
        }

        let ref_min = projected.iter().map(|row| row.start).min().unwrap();
        let ref_max = projected.iter().map(|row| row.end).max().unwrap();

        // widest insertion event wins the column count at each anchor
        let mut anchors: BTreeMap<i64, usize> = BTreeMap::new();
        for row in projected.iter() {
            for (anchor, bases, _) in row.insertions.iter() {
                let width = anchors.entry(*anchor).or_insert(0);
                *width = (*width).max(bases.len());
            }
        }

        let mut columns = Vec::new();
        let mut ref_column_index: HashMap<i64, usize> = HashMap::new();
        let mut insertion_runs: HashMap<i64, (usize, usize)> = HashMap::new();
        for pos in ref_min..=ref_max {
            if let Some(width) = anchors.get(&pos) {
                insertion_runs.insert(pos, (columns.len(), *width));
                for _ in 0..*width {
                    columns.push(MsaColumn::insertion(pos));
                }
            }
            if pos < ref_max {
                ref_column_index.insert(pos, columns.len());
                columns.push(MsaColumn::reference(pos));
            }
        }

        let num_rows = projected.len();
        let num_columns = columns.len();
        let mut msa = Array2::<u8>::from_elem((num_rows, num_columns), BaseUtils::PADDING);
        let mut qscores = Array2::<u8>::zeros((num_rows, num_columns));
        let mut strands = Array2::<u8>::zeros((num_rows, num_columns));

        for (row_index, row) in projected.iter().enumerate() {
            if row.is_reverse {
                strands.row_mut(row_index).fill(1);
            }
            for (pos, code, quality) in row.cells.iter() {
                let column = ref_column_index[pos];
                msa[[row_index, column]] = *code;
                qscores[[row_index, column]] = *quality;
            }
            for (anchor, (run_start, width)) in insertion_runs.iter() {
                let event = row
                    .insertions
                    .iter()
                    .find(|(event_anchor, _, _)| event_anchor == anchor);
                match event {
                    Some((_, bases, quals)) => {
                        // left aligned, right padded with gap
                        for offset in 0..*width {
                            let column = run_start + offset;
                            if offset < bases.len() {
                                msa[[row_index, column]] = bases[offset];
                                qscores[[row_index, column]] = quals[offset];
                            } else {
                                msa[[row_index, column]] = BaseUtils::GAP;
                            }
                        }
                    }
                    None => {
                        // a read spanning the junction votes gap, a read
                        // ending at it saw nothing
                        if row.start < *anchor && *anchor < row.end {
                            for offset in 0..*width {
                                msa[[row_index, run_start + offset]] = BaseUtils::GAP;
                            }
                        }
                    }
                }
            }
        }

        let mut info = AlignmentInfo::new(msa, qscores, strands, columns);
        Self::drop_uncalled_columns(&mut info);
        Self::trim_boundary_columns(&mut info);
        Ok(info)
    }

    fn project_read(&self, read: &ReadRecord) -> Result<Option<ProjectedRead>, ConsensusError> {
        let read = if self.remove_soft_clips {
            match read.without_soft_clips() {
                Some(stripped) => stripped,
                None => return Ok(None),
            }
        } else {
            read.clone()
        };

        // with clips kept, project them at their unclipped positions
        let leading_clip: i64 = read
            .cigar
            .iter()
            .take_while(|element| matches!(element, Cigar::SoftClip(_)))
            .map(|element| element.len() as i64)
            .sum();

        let start = read.reference_start - leading_clip;
        let mut ref_cursor = start;
        let mut base_cursor = 0usize;
        let mut cells = Vec::new();
        let mut insertions: Vec<(i64, Vec<u8>, Vec<u8>)> = Vec::new();

        for element in read.cigar.iter() {
            match element {
                Cigar::Match(length) | Cigar::SoftClip(length) => {
                    for _ in 0..*length {
                        let code = BaseUtils::encode_base(read.bases[base_cursor])?;
                        cells.push((ref_cursor, code, read.qscores[base_cursor]));
                        ref_cursor += 1;
                        base_cursor += 1;
                    }
                }
                Cigar::Del(length) => {
                    for _ in 0..*length {
                        cells.push((ref_cursor, BaseUtils::GAP, 0));
                        ref_cursor += 1;
                    }
                }
                Cigar::Ins(length) => {
                    let mut bases = Vec::with_capacity(*length as usize);
                    let mut quals = Vec::with_capacity(*length as usize);
                    for _ in 0..*length {
                        bases.push(BaseUtils::encode_base(read.bases[base_cursor])?);
                        quals.push(read.qscores[base_cursor]);
                        base_cursor += 1;
                    }
                    match insertions.last_mut() {
                        // back to back events collapse onto one anchor
                        Some((anchor, event_bases, event_quals)) if *anchor == ref_cursor => {
                            event_bases.extend(bases);
                            event_quals.extend(quals);
                        }
                        _ => insertions.push((ref_cursor, bases, quals)),
                    }
                }
                _ => unreachable!("operators validated upstream"),
            }
        }

        Ok(Some(ProjectedRead {
            cells,
            insertions,
            start,
            end: ref_cursor,
            is_reverse: read.is_reverse,
        }))
    }

    // columns where every covering read deleted the base carry no signal
    fn drop_uncalled_columns(info: &mut AlignmentInfo) {
        let doomed = (0..info.num_columns())
            .filter(|column| {
                info.msa
                    .column(*column)
                    .iter()
                    .all(|cell| !BaseUtils::is_base(*cell))
            })
            .collect::<Vec<usize>>();
        if !doomed.is_empty() {
            info.remove_columns_at(&doomed);
        }
    }

    // boundary columns reached by a single read are alignment wiggle, not
    // cluster evidence; single read clusters are exempt
    fn trim_boundary_columns(info: &mut AlignmentInfo) {
        let threshold = info.num_reads().min(2);
        let mut first = 0;
        let mut last = info.num_columns();
        while first < last && info.num_pass_per_column[first] < threshold {
            first += 1;
        }
        while last > first && info.num_pass_per_column[last - 1] < threshold {
            last -= 1;
        }
        if first > 0 || last < info.num_columns() {
            let doomed = (0..first)
                .chain(last..info.num_columns())
                .collect::<Vec<usize>>();
            info.remove_columns_at(&doomed);
        }
    }
}
