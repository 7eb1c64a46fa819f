pub mod line_rewriter;

pub use line_rewriter::{repair_lines, rewrite_line, LineRewriter, RewrittenLine};
