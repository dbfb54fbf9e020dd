//! Prompt builders for the counselling endpoints.
//!
//! User input is embedded verbatim. Nothing is escaped, so a caller can steer
//! the model through the prompt; that is accepted behavior for this service.

use crate::counsel::models::{ArgumentRequest, ProfileRequest};

/// Prompt asking for bullet-point reasons to take up the recommended job.
pub fn argument_prompt(request: &ArgumentRequest) -> String {
    format!(
        "Given a person's qualifications are\n{data}\nand the recommended job is {recommendation}, \
can you provide me with some justifications as to why the person must take up the job, \
provide these points in bullet points in the following format.
1. Reason
2. Reason
3. Reason
and so on",
        data = request.data,
        recommendation = request.recommendation,
    )
}

/// Prompt asking for a JSON array of `Recommendation` objects.
pub fn recommendation_prompt(profile: &ProfileRequest) -> String {
    format!(
        r#"You are a vocational counselor. Suggest the top 3 suitable vocational fields for the following person. Include short reasoning for the suggestion.
Candidate Profile:
* Educational Qualification: {education},
* Previous Experience: {previous_experience},
* Gender: {gender},
* Physical Disability: {physical_disability},
* Sole Earner: {sole_earner},
* English Language Proficiency: {english},
* Personal Preference: {preference},
Respond in JSON format:
[
    {{
        "vertical": A vertical of vocational skill
        "confidence": A confidence in the prediction, which is an integer
        "justification": A single line justification for the role
        "duration": The duration of the course, e.g. "3 months"
    }}
]"#,
        education = profile.education,
        previous_experience = profile.previous_experience,
        gender = profile.gender,
        physical_disability = profile.physical_disability,
        sole_earner = profile.sole_earner,
        english = profile.english_language_preference,
        preference = profile.personal_preference,
    )
}
