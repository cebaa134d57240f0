use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    featurepack completions bash > ~/.bash_completion.d/featurepack\n\n\
                  Generate zsh completions:\n    featurepack completions zsh > ~/.zfunc/_featurepack\n\n\
                  Generate fish completions:\n    featurepack completions fish > ~/.config/fish/completions/featurepack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
