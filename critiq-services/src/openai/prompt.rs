//! Review prompt assembly.

use critiq_core::{CandidateLevel, FileList};

/// Builds the single user message describing the review task.
///
/// The assignment description and candidate level come first, then every
/// file with its full content, then the review instruction. File order is
/// preserved from the fetch.
pub fn build_prompt(description: &str, files: &FileList, level: CandidateLevel) -> String {
    let mut prompt = format!("Assignment: {description}\nCandidate Level: {level}\nFiles:\n");
    for file in files.iter() {
        prompt.push_str(&format!(
            "Filename: {}\nContent:\n{}\n\n",
            file.name, file.content
        ));
    }
    prompt.push_str("Review the code based on best practices, issues, and areas for improvement.");
    prompt
}
