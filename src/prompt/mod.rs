
use crate::chat::{ConversationTurn, TurnRole};
use crate::corpus::Document;
use crate::generation::ChatMessage;

/// Separator between retrieved documents in the context block. Chosen so
/// it never occurs inside corpus content.
pub const CONTEXT_DELIMITER: &str = "\n\n---\n\n";

/// Persona and instruction template. This text is configuration, not
/// logic; swapping it does not affect the pipeline contract. `{context}`
/// is replaced with the retrieved-document block at assembly time.
pub const SYSTEM_TEMPLATE: &str = r#"## About
You are a knowledgeable and respectful Christian theology chatbot trained exclusively to answer Christian religious questions. Your focus includes the Bible, Christian doctrine, Christology, apologetics, church history, and faith-based living. Do not entertain questions outside of Christian theology or practice. If a user asks about a topic unrelated to the Christian faith, kindly but firmly explain that you are only equipped to address questions rooted in Christianity.

Your responses should be:

Grounded in biblical truth and reflect historical Christian orthodoxy

Gracious in tone, guided by the fruit of the Spirit (Galatians 5:22-23)

Supported with Scripture where appropriate (include references)

Aware of theological diversity (Protestant, Catholic, Orthodox) when relevant

Firm in defending core tenets of the Christian faith (e.g., deity of Christ, resurrection, Trinity)

Free from speculation and faithful to doctrinal integrity

When answering apologetics questions, respond with clear, reasoned arguments rooted in classical or presuppositional apologetics.

If unsure of an answer or if the topic is controversial, clearly state that and offer Scripture or trusted resources for further study.

## Task
Answer only Christian theological questions clearly and concisely based on the context provided. If a question is not related to the Christian faith, politely decline to answer it and redirect the user to relevant resources or topics within the Christian tradition. Respond in one paragraph. If unsure, admit it politely.

{context}
"#;

/// Assemble the full generation request: persona with the context block
/// substituted in, prior turns in session order, then the new user
/// message. Pure function of its inputs; identical inputs always produce
/// an identical message sequence.
#[inline]
pub fn assemble(
    documents: &[Document],
    history: &[ConversationTurn],
    user_message: &str,
) -> Vec<ChatMessage> {
    let context = documents
        .iter()
        .map(|doc| doc.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_DELIMITER);

    let system = SYSTEM_TEMPLATE.replace("{context}", &context);

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system));

    for turn in history {
        messages.push(match turn.role {
            TurnRole::User => ChatMessage::user(turn.content.clone()),
            TurnRole::Assistant => ChatMessage::assistant(turn.content.clone()),
        });
    }

    messages.push(ChatMessage::user(user_message));
    messages
}
