//! The PyRite language: runtime values and the abstract syntax tree.

pub mod bytes;
pub mod class;
pub mod expression;
pub mod function;
pub mod kind;
pub mod list;
pub mod number;
pub mod operator;
pub mod param;
pub mod script;
pub mod statements;
pub mod strand;
pub mod value;

pub use self::bytes::Binary;
pub use self::class::{BoundMethod, Class, Instance};
pub use self::expression::{Expression, ExpressionKind};
pub use self::function::Function;
pub use self::kind::Kind;
pub use self::list::List;
pub use self::number::BigDecimal;
pub use self::operator::Operator;
pub use self::param::Param;
pub use self::script::Script;
pub use self::statements::Statement;
pub use self::strand::Strand;
pub use self::value::Value;
