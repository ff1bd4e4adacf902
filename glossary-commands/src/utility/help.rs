use glossary_core::{Context, Error};

use crate::replies::docs_message;
use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(help_description()).await?;
    Ok(())
}

fn help_description() -> String {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    let mut out = String::new();
    let mut current_category: Option<&str> = None;
    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", display_category(command.category)));
            current_category = Some(command.category);
        }
        out.push_str(&format!("`{}` - {}\n", command.usage, command.desc));
    }

    out.push('\n');
    out.push_str(&docs_message());
    out
}

fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_category, help_description};

    #[test]
    fn help_groups_by_category() {
        let description = help_description();
        let glossary = description.find("**Glossary**").unwrap();
        let utility = description.find("**Utility**").unwrap();
        assert!(glossary < utility);
        assert!(description.contains("`!search <search terms>`"));
    }

    #[test]
    fn categories_are_capitalized() {
        assert_eq!(display_category("glossary"), "Glossary");
        assert_eq!(display_category(""), "");
    }
}
