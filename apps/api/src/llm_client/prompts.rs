// Prompt templates for every oracle call. `{resume_text}` is substituted verbatim.

pub const FEEDBACK_PROMPT: &str = "\
Analyze this resume text and give specific feedback:
1. Missing skills
2. Tone improvement
3. Clarity
4. ATS tips

Resume:
{resume_text}";

/// Used for job matching: technical skills only, names only.
pub const TECHNICAL_SKILLS_PROMPT: &str = "\
Extract only the technical skills from this resume as a comma-separated list. \
Include only the skill names and do not add any feedback:
{resume_text}";

/// Broader extraction covering soft skills as well.
pub const ALL_SKILLS_PROMPT: &str = "\
From the following resume text, extract a comma-separated list of technical and soft skills:

{resume_text}";

pub fn render(template: &str, resume_text: &str) -> String {
    template.replace("{resume_text}", resume_text)
}
