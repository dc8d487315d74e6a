use crate::types::{AssembledContext, ScannedFile};

/// Pack scanned files into a single context block under a character budget.
///
/// Files are considered in the order given. Each one is rendered as a
/// labeled fenced block; a file whose block would push the running total to
/// `max_context_length` or beyond stops the packing immediately. Greedy and
/// non-backtracking: later files are not considered once one fails to fit,
/// even if they are individually smaller. Worst case (the first file is
/// already too big) yields empty text and a count of zero.
pub fn assemble_context(files: &[ScannedFile], max_context_length: usize) -> AssembledContext {
    let mut text = String::new();
    let mut included_count = 0;

    for file in files {
        let block = format!("File: {}\n```\n{}\n```\n\n", file.path, file.content);
        if text.len() + block.len() >= max_context_length {
            break;
        }
        text.push_str(&block);
        included_count += 1;
    }

    AssembledContext {
        text,
        included_count,
    }
}
