mod token;

use crate::batch::WorkItem;
use itertools::Itertools;
use token::Token;

pub const DEFAULT_GH_BIN_NAME: &str = "gh";
const CREATE_PULL_REQUEST_SUBCOMMAND: [&str; 2] = ["pr", "create"];

/// The `gh pr create` invocation for one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<Token>,
}

impl CommandLine {
    /// Flag order is fixed: `--draft`, title, body, base, head, labels,
    /// assignees, reviewers and `--repo` last.
    pub fn render(item: &WorkItem) -> Self {
        let mut tokens = vec![Token::literal(DEFAULT_GH_BIN_NAME)];
        tokens.extend(CREATE_PULL_REQUEST_SUBCOMMAND.map(Token::literal));

        if item.draft {
            tokens.push(Token::literal("--draft"));
        }

        push_pair(&mut tokens, "--title", &item.title);
        push_pair(&mut tokens, "--body", &item.body);
        push_pair(&mut tokens, "--base", &item.base);
        push_pair(&mut tokens, "--head", &item.head);

        for label in &item.labels {
            push_pair(&mut tokens, "--label", label);
        }
        for assignee in &item.assignees {
            push_pair(&mut tokens, "--assignee", assignee);
        }
        for reviewer in &item.reviewers {
            push_pair(&mut tokens, "--reviewer", reviewer);
        }

        push_pair(&mut tokens, "--repo", &item.repo);

        CommandLine { tokens }
    }

    /// Argument vector for the executor, values unquoted.
    pub fn args(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.as_str().to_owned()).collect()
    }

    /// Human readable form with every value quoted. Never executed.
    pub fn preview(&self) -> String {
        self.tokens.iter().map(Token::display).join(" ")
    }
}

fn push_pair(tokens: &mut Vec<Token>, flag: &'static str, value: &str) {
    tokens.push(Token::literal(flag));
    tokens.push(Token::value(value));
}
