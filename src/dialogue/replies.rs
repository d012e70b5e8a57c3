use crate::corpus::RecipeDetails;
use crate::search::Candidate;

pub fn welcome() -> String {
    "Hi there! I'm **SousChef** 👋\n\
     Tell me what's in your kitchen, plus any limits (*veg / non-veg / vegan*, \
     cuisine, or time), and I'll suggest a dish."
        .to_string()
}

pub fn chat_closed() -> String {
    "This chat is closed. Start a **new chat** to keep cooking.".to_string()
}

pub fn no_match() -> String {
    "I couldn't find a good match. Add more details (e.g., cuisine or time), or remove \
     exclusions."
        .to_string()
}

pub fn pick_nudge() -> String {
    "Please reply with the **number** or **dish name** from the list. If you want to change \
     ingredients, just type them."
        .to_string()
}

pub fn try_other_dishes() -> String {
    "No problem. Share new ingredients or constraints, and I'll suggest more dishes.".to_string()
}

pub fn ask_updated_constraints() -> String {
    "Tell me your updated ingredients or constraints, and I'll fetch a new list.".to_string()
}

pub fn fallback_prompt() -> String {
    "Tell me your ingredients (e.g., *paneer and tomato, veg, under 20 minutes*).".to_string()
}

pub fn closing(title: &str) -> String {
    format!(
        "Great! Enjoy **{title}** 🎉\nThis chat is now closed. Start a new one whenever you're \
         hungry again."
    )
}

fn candidate_line(position: usize, candidate: &Candidate) -> String {
    let mut meta = Vec::new();
    if let Some(time) = candidate.time {
        meta.push(format!("{time} min"));
    }
    if !candidate.cuisine.is_empty() {
        meta.push(candidate.cuisine.clone());
    }
    if !candidate.diet.is_empty() {
        meta.push(candidate.diet.clone());
    }

    let line = format!("{position}. **{}**", candidate.title);
    if meta.is_empty() { line } else { format!("{line} ({})", meta.join(" · ")) }
}

/// Numbered candidate list, preceded by a header naming the active
/// constraints when there are any.
pub fn search_results(constraint_bits: &[String], candidates: &[Candidate]) -> String {
    let mut out = String::new();
    if !constraint_bits.is_empty() {
        out.push_str(&format!("Got it — {}\n\n", constraint_bits.join(", ")));
    }

    out.push_str("Here are some dishes you might like (reply with the **number** or **name**):");
    for (i, candidate) in candidates.iter().enumerate() {
        out.push('\n');
        out.push_str(&candidate_line(i + 1, candidate));
    }
    out
}

/// Full recipe card plus the yes/no confirmation prompt. Detail-lookup
/// misses flow through as "N/A" fields rather than failing the turn.
pub fn recipe_card(title: &str, details: &RecipeDetails) -> String {
    format!(
        "**{title}**\n\n**Ingredients:** {}\n\n**Steps:** {}\n\nWas this recipe for **{title}** \
         helpful? Reply **yes** or **no**.",
        details.ingredients, details.steps
    )
}
