// All prompt constants and fallback strings for the model gateway.
// Templates use `{placeholder}` slots filled by the gateway before sending.

/// Body text used when the grounded search returns no usable content.
pub const NO_POSTINGS_FALLBACK: &str =
    "No current postings found. Please refine your search keywords.";

/// Title used for grounding sources the provider returned without one.
pub const DEFAULT_SOURCE_TITLE: &str = "Job Posting / Recruiter Link";

/// Cover letter returned when the provider produces empty content.
pub const COVER_LETTER_FALLBACK: &str = "Unable to generate cover letter.";

/// Interview question asked when the provider produces empty content.
pub const INTERVIEW_QUESTION_FALLBACK: &str =
    "Please describe your professional experience in France.";

/// Job-match prompt. Replace: {field}, {skills}, {visa_type},
/// {language_level}, {preferences}.
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Perform an exhaustive, real-time search for current job and internship postings in France/EU for this student profile.
Explore every possible platform including:
- LinkedIn (search for recruiter posts, hiring updates, and "hidden" roles)
- Welcome to the Jungle France
- Apec, Indeed France, and Glassdoor
- Niche industry boards and startup portals (Station F, etc.)

User Profile:
- Field: {field}
- Skills: {skills}
- Visa Type: {visa_type}
- Language Level: {language_level}
- Preferences: {preferences}

For each result, prioritize those that are "visa friendly" or suitable for {visa_type} holders.
Identify:
1. Job Title & Company (Include Platform/Source)
2. Location (City/Remote status)
3. Key requirements matched against user skills
4. Direct application advice (Cultural nuances or visa strategy)

Format the response as a clear, structured Markdown list with bold headers."#;

/// CV analysis prompt. Replace: {jd_context} (empty or a one-line target-job
/// sentence), {cv_text}. The response is schema-constrained to the four
/// CvAnalysis fields.
pub const CV_ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze this CV for a student seeking work in France. {jd_context}
CV Content: {cv_text}
1. Score formatting based on French "CV professionnel" standards (0-100).
2. Provide 3-5 specific content improvements.
3. Give 3 cultural phrasing tips for the French/EU context.
4. Provide a reformatted Markdown version."#;

/// Cover letter prompt. Replace: {cv_text}, {analysis_json},
/// {job_description}, {formatting_score}.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Acting as a French professional career coach, generate a tailored "Lettre de Motivation" (Cover Letter).
CV Data: {cv_text}
Analysis: {analysis_json}
Target Job: {job_description}

Requirements:
- Follow the French tripartite structure: Vous (The Company), Moi (The Candidate), Nous (The Partnership).
- Maintain high professional etiquette.
- Mention readiness to work under {formatting_score}% match conditions.
- Write in English but with French cultural structure.
- Return ONLY the letter text."#;

/// Interview question prompt. Replace: {field}, {profile_json},
/// {history_json}, {visa_type}. The visa line guarantees one question
/// addresses the candidate's status.
pub const INTERVIEW_QUESTION_PROMPT_TEMPLATE: &str = r#"AI Interview Coach session for the {field} sector in France.
User Profile: {profile_json}
History: {history_json}
Ask the next behavioral or technical question. Ensure one question specifically addresses their {visa_type} status in a professional context.
Return ONLY the question."#;

/// Interview feedback prompt. Replace: {history_json}. The response is
/// schema-constrained to the three InterviewFeedback fields.
pub const INTERVIEW_FEEDBACK_PROMPT_TEMPLATE: &str = r#"Review this interview transcript for a French company role: {history_json}.
Analyze for professional tone, cultural fit, and clarity."#;
