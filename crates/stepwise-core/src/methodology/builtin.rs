//! Built-in methodology definitions.

use super::model::{Methodology, Step};

pub const FOUR_STEP: &str = "4-step";
pub const FIVE_WHYS: &str = "5-whys";
pub const DESIGN_THINKING: &str = "design-thinking";
pub const PDCA: &str = "pdca";
pub const FIRST_PRINCIPLES: &str = "first-principles";

/// The methodology used when an identifier cannot be resolved.
pub const DEFAULT_METHODOLOGY_ID: &str = FOUR_STEP;

/// All built-in methodologies, in selector display order.
pub fn builtin_methodologies() -> Vec<Methodology> {
    vec![
        four_step(),
        five_whys(),
        design_thinking(),
        pdca(),
        first_principles(),
    ]
}

fn four_step() -> Methodology {
    Methodology::new(
        FOUR_STEP,
        "4-Step Method",
        "Original systematic approach with questioning, isolation, tracing, and quick fixes",
        vec![
            Step::new(
                1,
                "Ask Questions!",
                "Start by understanding the issue fully before implementing solutions",
                "We're often so focused on fixing things that we sometimes try to implement a solution before properly diagnosing the problem. Always start by asking questions to understand the issue fully.",
                &[
                    "What exactly is the problem?",
                    "When did this problem first occur?",
                    "Who is affected by this problem?",
                    "What has changed recently?",
                    "What are the symptoms vs. the actual problem?",
                ],
            ),
            Step::new(
                2,
                "Isolate the Problem",
                "Shrink the scope of the potential issue efficiently",
                "The goal of this method is to shrink the scope of the potential issue. For example: What's the quickest way to guess a number I'm thinking of that's less than 100? If you use a search algorithm like binary search, you're on the right path. Now apply this principle to your problem and narrow it down efficiently.",
                &[
                    "Can you reproduce the problem consistently?",
                    "What components/systems are involved?",
                    "What can you rule out as causes?",
                    "Is this affecting everyone or just specific users?",
                    "What's the smallest test case that shows the problem?",
                ],
            ),
            Step::new(
                3,
                "Follow the Cookie Crumbs",
                "Trace back to when the problem first started",
                "This method requires you to trace back to when the problem first started and work forward from there. It helps you understand the context and progression of the issue.",
                &[
                    "When was the last time this worked correctly?",
                    "What changes happened between then and now?",
                    "What does the timeline of events look like?",
                    "Are there any patterns in when the problem occurs?",
                    "What logs or traces can you follow?",
                ],
            ),
            Step::new(
                4,
                "Start with the Quickest Step First",
                "Try the simplest, fastest potential fix first",
                "Try the simplest, fastest potential fix first (e.g., reboot the computer). It might resolve the issue without diving deeper unnecessarily.",
                &[
                    "What's the quickest thing you can try?",
                    "Have you tried turning it off and on again?",
                    "What are the low-risk, high-impact actions?",
                    "Can you rollback recent changes?",
                    "What would take less than 5 minutes to test?",
                ],
            ),
        ],
    )
}

fn five_whys() -> Methodology {
    Methodology::new(
        FIVE_WHYS,
        "5 Whys",
        "Root cause analysis by asking 'why' five times to drill down to fundamental causes",
        vec![
            Step::new(
                1,
                "Define the Problem",
                "Clearly state what the problem is",
                "Start by writing down the specific problem. Be precise and factual. Avoid assumptions or jumping to conclusions about causes.",
                &[
                    "What exactly happened?",
                    "When did it occur?",
                    "Where did it occur?",
                    "What is the impact?",
                    "How do you know this is a problem?",
                ],
            ),
            Step::new(
                2,
                "First Why",
                "Ask why the problem occurred",
                "Ask why the problem happened. Focus on facts, not blame. Look for the immediate cause of the problem.",
                &[
                    "Why did this problem occur?",
                    "What immediate factors contributed?",
                    "What evidence supports this cause?",
                    "Are there any other immediate causes?",
                    "How confident are you in this answer?",
                ],
            ),
            Step::new(
                3,
                "Second Why",
                "Ask why the first cause occurred",
                "Take the answer from the first why and ask why that happened. You're digging deeper into the underlying causes.",
                &[
                    "Why did the first cause happen?",
                    "What led to that situation?",
                    "Were there warning signs?",
                    "What processes or systems were involved?",
                    "Could this have been prevented?",
                ],
            ),
            Step::new(
                4,
                "Third Why",
                "Continue drilling down with why",
                "Ask why the second cause occurred. You're getting closer to systemic or root causes.",
                &[
                    "Why did that underlying cause exist?",
                    "What systemic issues contributed?",
                    "Are there patterns or recurring themes?",
                    "What policies or procedures are relevant?",
                    "How long has this underlying issue existed?",
                ],
            ),
            Step::new(
                5,
                "Fourth & Fifth Why",
                "Reach the root cause level",
                "Continue asking why until you reach a root cause that, if addressed, would prevent the problem from recurring. You might need more or fewer than 5 whys.",
                &[
                    "Why does this systemic issue persist?",
                    "What fundamental problems exist?",
                    "If we fix this, will it prevent recurrence?",
                    "Are there multiple root causes?",
                    "What actionable solutions emerge?",
                ],
            ),
        ],
    )
}

fn design_thinking() -> Methodology {
    Methodology::new(
        DESIGN_THINKING,
        "Design Thinking",
        "Human-centered approach: Empathize, Define, Ideate, Prototype, Test",
        vec![
            Step::new(
                1,
                "Empathize",
                "Understand the users and their needs",
                "Develop a deep understanding of the people affected by the problem. Observe, engage, and immerse yourself in their experiences.",
                &[
                    "Who are the users affected by this problem?",
                    "What are their pain points and frustrations?",
                    "What motivates and drives them?",
                    "How do they currently solve this problem?",
                    "What emotions do they experience?",
                ],
            ),
            Step::new(
                2,
                "Define",
                "Frame the problem from user perspective",
                "Synthesize your observations into a clear problem statement. Define the core problem you're trying to solve from the user's perspective.",
                &[
                    "What is the core problem statement?",
                    "How might we frame this from user perspective?",
                    "What are the key constraints?",
                    "What would success look like?",
                    "What assumptions are we making?",
                ],
            ),
            Step::new(
                3,
                "Ideate",
                "Generate creative solution ideas",
                "Brainstorm a wide range of creative solutions. Focus on quantity over quality initially. Think outside the box and challenge assumptions.",
                &[
                    "What are all possible solutions?",
                    "How might we approach this differently?",
                    "What would the ideal solution look like?",
                    "What if we had unlimited resources?",
                    "What unconventional approaches could work?",
                ],
            ),
            Step::new(
                4,
                "Prototype",
                "Build quick, testable versions of solutions",
                "Create simple, scaled-down versions of your solutions to test key assumptions. Focus on learning, not perfection.",
                &[
                    "What's the minimum viable version to test?",
                    "What key assumptions need validation?",
                    "How can we build this quickly and cheaply?",
                    "What feedback are we seeking?",
                    "What could we learn from a simple test?",
                ],
            ),
            Step::new(
                5,
                "Test",
                "Test prototypes with users and gather feedback",
                "Test your prototypes with real users. Gather feedback, observe behavior, and learn what works and what doesn't.",
                &[
                    "How did users respond to the prototype?",
                    "What worked well?",
                    "What didn't work as expected?",
                    "What new insights emerged?",
                    "How should we iterate based on feedback?",
                ],
            ),
        ],
    )
}

fn pdca() -> Methodology {
    Methodology::new(
        PDCA,
        "PDCA Cycle",
        "Plan-Do-Check-Act continuous improvement cycle",
        vec![
            Step::new(
                1,
                "Plan",
                "Identify the problem and plan a solution",
                "Define the problem clearly, analyze the current situation, and develop a plan for improvement. Set objectives and predict outcomes.",
                &[
                    "What is the current situation?",
                    "What are the root causes?",
                    "What is our improvement goal?",
                    "What actions will we take?",
                    "How will we measure success?",
                ],
            ),
            Step::new(
                2,
                "Do",
                "Implement the plan on a small scale",
                "Execute the plan, preferably on a small scale or as a pilot. Document what happens during implementation.",
                &[
                    "How will we implement this change?",
                    "What resources do we need?",
                    "Who is responsible for each action?",
                    "What timeline will we follow?",
                    "How will we document the process?",
                ],
            ),
            Step::new(
                3,
                "Check",
                "Study the results and measure outcomes",
                "Analyze the results of your implementation. Compare actual outcomes with predicted outcomes. Identify what worked and what didn't.",
                &[
                    "What were the actual results?",
                    "How do they compare to predictions?",
                    "What worked well?",
                    "What unexpected issues arose?",
                    "What did we learn?",
                ],
            ),
            Step::new(
                4,
                "Act",
                "Standardize successful changes or try again",
                "If the change was successful, standardize it and implement it widely. If not, learn from the failure and start the cycle again with new knowledge.",
                &[
                    "Should we standardize this change?",
                    "How can we implement it organization-wide?",
                    "What processes need updating?",
                    "If unsuccessful, what will we try next?",
                    "How do we prevent regression?",
                ],
            ),
        ],
    )
}

fn first_principles() -> Methodology {
    Methodology::new(
        FIRST_PRINCIPLES,
        "First Principles",
        "Break down complex problems to fundamental truths and build up solutions",
        vec![
            Step::new(
                1,
                "Identify the Problem",
                "Clearly define what you're trying to solve",
                "Start by clearly articulating the problem without any assumptions about how it should be solved.",
                &[
                    "What exactly are we trying to achieve?",
                    "What is the core problem statement?",
                    "What are we assuming about this problem?",
                    "How have others typically approached this?",
                    "What constraints are we accepting without question?",
                ],
            ),
            Step::new(
                2,
                "Break Down to Fundamentals",
                "Reduce the problem to its basic elements",
                "Strip away all assumptions and break the problem down to its most fundamental components. What are the basic truths that cannot be reduced further?",
                &[
                    "What are the most basic elements of this problem?",
                    "What facts do we know to be absolutely true?",
                    "What physics, mathematics, or natural laws apply?",
                    "What assumptions can we eliminate?",
                    "What are the irreducible components?",
                ],
            ),
            Step::new(
                3,
                "Question Everything",
                "Challenge all assumptions and conventional wisdom",
                "Question every assumption, including those that seem obvious. Why do we believe certain things are true or necessary?",
                &[
                    "Why do we assume this must be done this way?",
                    "What if the opposite were true?",
                    "What conventional wisdom should we challenge?",
                    "What would we do if this was the first time this problem existed?",
                    "What are we taking for granted?",
                ],
            ),
            Step::new(
                4,
                "Rebuild from Scratch",
                "Create new solutions from fundamental truths",
                "Using only the fundamental truths you've identified, build up new solutions without being constrained by how things are currently done.",
                &[
                    "If we started from scratch, how would we solve this?",
                    "What new approaches emerge from first principles?",
                    "How can we combine fundamental elements differently?",
                    "What would an ideal solution look like?",
                    "What innovative approaches are now possible?",
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique_and_ordered() {
        let ids: Vec<String> = builtin_methodologies().into_iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![FOUR_STEP, FIVE_WHYS, DESIGN_THINKING, PDCA, FIRST_PRINCIPLES]
        );
    }

    #[test]
    fn test_step_numbers_are_sequential() {
        for methodology in builtin_methodologies() {
            for (index, step) in methodology.steps.iter().enumerate() {
                assert_eq!(step.number as usize, index + 1, "{}", methodology.id);
                assert!(!step.prompts.is_empty());
            }
        }
    }

    #[test]
    fn test_step_counts() {
        let counts: Vec<usize> = builtin_methodologies()
            .iter()
            .map(Methodology::step_count)
            .collect();
        assert_eq!(counts, vec![4, 5, 5, 4, 4]);
    }
}
