//! Prompt templates for resume generation.

pub const GENERATE_SYSTEM: &str = "You are an ATS optimization expert. \
You write plain-text resumes that applicant tracking systems parse cleanly. \
Output plain text only: no markdown, no tables, no decorative characters.";

pub const RESUME_PROMPT_TEMPLATE: &str = "\
Create an ATS-friendly resume for the role of {role}.

Candidate:
Name: {name}
Email: {email}
Phone: {phone}

Job Description:
{jd}

Background provided by the candidate:
{content}

Rules:
- Start with the candidate's name and a contact line.
- Use the section headings SUMMARY, SKILLS, PROJECTS, EDUCATION, in that order.
- Under SKILLS, list skills on comma-separated lines.
- Use '- ' for bullet points everywhere else.
- Mirror relevant keywords from the job description honestly; never invent experience.
";
