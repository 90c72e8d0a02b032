//! Prompt templates for the two report flavors.

use std::fmt::Write;

use crate::fetch::PageContent;

/// Founder-supplied facts for the scored analysis.
#[derive(Debug, Clone)]
pub struct ScoredFacts<'a> {
    pub target_customer: &'a str,
    pub value_prop: &'a str,
}

/// Founder-supplied facts for the verdict/plan report.
#[derive(Debug, Clone)]
pub struct ReportFacts<'a> {
    pub building: &'a str,
    pub who_is_for: &'a str,
    pub pain_point: &'a str,
    pub stage: &'a str,
}

/// Build the scored-analysis prompt.
///
/// Page content is optional: a failed fetch degrades the prompt, never the
/// request. Previous scores, when present, ask the model to quantify the
/// improvement delta for the iteration.
pub fn scored_prompt(
    facts: &ScoredFacts<'_>,
    page: Option<&PageContent>,
    pricing: Option<&PageContent>,
    previous_scores: Option<(i32, i32)>,
) -> String {
    let mut prompt = String::from(
        "You are an expert startup advisor and high-conversion copywriter. \
         Analyze this founder's product positioning and landing page.\n\n",
    );

    match page {
        Some(content) => {
            let _ = writeln!(
                prompt,
                "LANDING PAGE CONTENT:\nTitle: {}\nHeadings: {}\nKey Content: {}\n",
                content.title,
                content.headings.join(" | "),
                content.paragraphs[..content.paragraphs.len().min(10)].join(" "),
            );
        }
        None => prompt.push_str("LANDING PAGE CONTENT: (not available)\n\n"),
    }

    let _ = writeln!(
        prompt,
        "FOUNDER'S INPUT:\nTarget Customer: {}\nValue Proposition: {}\n",
        facts.target_customer, facts.value_prop,
    );

    if let Some((positioning, icp)) = previous_scores {
        let _ = writeln!(
            prompt,
            "PREVIOUS SCORES (for improvement tracking):\n\
             - Positioning: {positioning}/10\n\
             - ICP Clarity: {icp}/10\n",
        );
    }

    if let Some(content) = pricing {
        let _ = writeln!(
            prompt,
            "PRICING PAGE CONTENT:\nHeadings: {}\nContent: {}\n",
            content.headings.join(" | "),
            content.paragraphs[..content.paragraphs.len().min(5)].join(" "),
        );
    }

    prompt.push_str(
        "Analyze this product across 4 dimensions. For each, provide:\n\
         1. A score from 1-10\n\
         2. Specific, actionable feedback (2-3 sentences)\n\
         3. 2-3 concrete suggestions\n\n\
         ADDITIONAL ADVANCED ANALYSIS:\n\
         1. COMPETITIVE BENCHMARK: Identify the top 3 direct or indirect competitors. \
         For each, state their name, a brief description, their weakness compared to \
         this product, and their strength.\n\
         2. COPY EDITOR: Provide 3 alternative, high-conversion headlines for this \
         landing page that better communicate the value proposition to the target customer.\n\
         3. IMPROVEMENT DELTA (IF PREVIOUS SCORES PROVIDED): Quantify the improvement \
         (or regression) in scores.\n\n\
         DIMENSIONS:\n\n\
         1. POSITIONING CLARITY\n\
         - Can someone tell who this is for in 5 seconds?\n\
         - Is the problem clear and specific?\n\n\
         2. ICP (Ideal Customer Profile) CLARITY\n\
         - Is the target audience too broad?\n\
         - Does the copy speak to a specific role or pain?\n\n\
         3. DIFFERENTIATION\n\
         - Does this sound like 50 other tools?\n\
         - Clear \"why you vs alternatives\"?\n\n\
         4. PRICING LOGIC\n\
         - Does pricing match the target customer?\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {\n\
           \"positioning\": { \"score\": <number>, \"feedback\": \"<string>\", \"suggestions\": [\"<string>\"], \"improvementDelta\": <number | null> },\n\
           \"icp\": { \"score\": <number>, \"feedback\": \"<string>\", \"suggestions\": [\"<string>\"], \"improvementDelta\": <number | null> },\n\
           \"differentiation\": { \"score\": <number>, \"feedback\": \"<string>\", \"suggestions\": [\"<string>\"] },\n\
           \"pricing\": { \"score\": <number>, \"feedback\": \"<string>\", \"suggestions\": [\"<string>\"] },\n\
           \"competitors\": [ { \"name\": \"<string>\", \"description\": \"<string>\", \"weakness\": \"<string>\", \"strength\": \"<string>\" } ],\n\
           \"headlineSuggestions\": [\"<headline 1>\", \"<headline 2>\", \"<headline 3>\"]\n\
         }",
    );

    prompt
}

/// Build the verdict/execution-plan prompt.
pub fn report_prompt(facts: &ReportFacts<'_>, page: Option<&PageContent>) -> String {
    let mut prompt = String::from(
        "You are a brutally honest startup advisor focused on speed, clarity, and execution. \
         Your goal is to tell the founder exactly what to do next, not just give vague feedback.\n\n\
         Startup Information:\n",
    );

    let _ = writeln!(prompt, "- What they are building: {}", facts.building);
    let _ = writeln!(prompt, "- Who it is for: {}", facts.who_is_for);
    let _ = writeln!(prompt, "- Primary pain/problem: {}", facts.pain_point);
    let _ = writeln!(prompt, "- Current stage: {}", facts.stage);

    if let Some(content) = page {
        let _ = writeln!(
            prompt,
            "- Landing Page Content: {}",
            serde_json::to_string(content).unwrap_or_default(),
        );
    }

    prompt.push_str(
        "\nRules:\n\
         - Make decisions, do not hedge.\n\
         - Avoid generic advice.\n\
         - Optimize for immediate progress.\n\
         - Assume the founder is overwhelmed.\n\
         - Reduce options instead of expanding them.\n\n\
         Output a JSON object with the following structure:\n\
         {\n\
           \"positioningVerdict\": \"A single, decisive statement: 'You are building X for Y who struggle with Z.'\",\n\
           \"brutalTruth\": \"A short, honest assessment of what is weak or risky.\",\n\
           \"focusAreas\": [\"3-5 concrete priorities for this week\"],\n\
           \"ignoreAreas\": [\"Items the founder should ignore for now to reduce anxiety\"],\n\
           \"sevenDayPlan\": [\n\
             {\"day\": 1, \"task\": \"Task description\"},\n\
             {\"day\": 2, \"task\": \"Task description\"},\n\
             {\"day\": 3, \"task\": \"Task description\"},\n\
             {\"day\": 4, \"task\": \"Task description\"},\n\
             {\"day\": 5, \"task\": \"Task description\"},\n\
             {\"day\": 6, \"task\": \"Task description\"},\n\
             {\"day\": 7, \"task\": \"Task description\"}\n\
           ]\n\
         }",
    );

    prompt
}
