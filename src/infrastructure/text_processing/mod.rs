mod composite_parser;
mod mineru_parser;
mod parser_factory;
mod parser_response;
mod plain_text_parser;

pub use composite_parser::CompositeParser;
pub use mineru_parser::{MineruParser, ParseOptions};
pub use parser_factory::ParserFactory;
pub use parser_response::{ContentItem, ParserResponse};
pub use plain_text_parser::PlainTextParser;
