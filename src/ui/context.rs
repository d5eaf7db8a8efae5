//! Detects whether fancy terminal output is appropriate

use std::io::IsTerminal;

/// Environment variables that mark a CI run
const CI_VARS: [&str; 9] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TEAMCITY_VERSION",
    "TF_BUILD",
];

/// Output mode for the current process
#[derive(Debug, Clone)]
pub struct UiContext {
    interactive: bool,
}

impl UiContext {
    /// Detect from the terminal and environment
    pub fn detect() -> Self {
        Self {
            interactive: std::io::stdout().is_terminal() && !Self::in_ci(),
        }
    }

    /// Plain output regardless of terminal (tests, `--format json`)
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// Spinners, colours and cliclack markers
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }

    fn in_ci() -> bool {
        CI_VARS.iter().any(|var| std::env::var_os(var).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_context() {
        let ctx = UiContext::non_interactive();
        assert!(!ctx.use_fancy_output());
    }
}
