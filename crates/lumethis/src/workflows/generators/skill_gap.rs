pub(crate) fn prompt(role: &str, current_skills: &str, business_goal: &str) -> String {
    let business_goal = if business_goal.trim().is_empty() {
        "not stated"
    } else {
        business_goal.trim()
    };
    format!(
        "Role: {role}\n\
         Current Team Skills: {current_skills}\n\
         Business Goal: {business_goal}\n\n\
         Using SFIA skill definitions, identify the skills gap and recommend 3 specific \
         training interventions. Keep it professional and concise."
    )
}
