// Prompt constants for the review call.

/// Instruction sent alongside the uploaded document.
pub const REVIEW_INSTRUCTION: &str = "Analyze the resume and provide actionable feedback \
    in case of any issues. If the resume is good, just say 'The resume is good.'";
