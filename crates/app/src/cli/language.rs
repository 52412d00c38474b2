use clap::Args;
use freshline::i18n::{Language, MessageKey, t};
use freshline_app::context::Session;

#[derive(Debug, Args)]
pub(crate) struct LanguageArgs {
    /// Language code (en, es)
    language: Language,
}

pub(crate) fn run(session: &mut Session, args: LanguageArgs) {
    session.set_language(args.language);

    println!(
        "{}: {}",
        t(MessageKey::LanguageSaved, args.language),
        args.language
    );
}
