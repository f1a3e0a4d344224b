/// Shorthand for producing a [`TokenKind`](super::TokenKind) from the text
/// of the token.
macro_rules! t {
	("any") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Any)
	};
	("ask") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Ask)
	};
	("await") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Await)
	};
	("bin") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Bin)
	};
	("catch") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Catch)
	};
	("contains") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Contains)
	};
	("dec") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Dec)
	};
	("def") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Def)
	};
	("do") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Do)
	};
	("else") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Else)
	};
	("endawait") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::EndAwait)
	};
	("enddef") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::EndDef)
	};
	("endif") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::EndIf)
	};
	("endins") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::EndIns)
	};
	("endtry") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::EndTry)
	};
	("endwhile") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::EndWhile)
	};
	("finally") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Finally)
	};
	("halt") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Halt)
	};
	("if") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::If)
	};
	("ins") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Ins)
	};
	("jump") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Jump)
	};
	("list") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::List)
	};
	("mark") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Mark)
	};
	("nul") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Nul)
	};
	("raise") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Raise)
	};
	("return") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Return)
	};
	("run") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Run)
	};
	("say") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Say)
	};
	("str") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Str)
	};
	("tense") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Tense)
	};
	("then") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Then)
	};
	("try") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::Try)
	};
	("while") => {
		$crate::syn::token::TokenKind::Keyword($crate::syn::token::Keyword::While)
	};
	("+") => {
		$crate::syn::token::TokenKind::Plus
	};
	("-") => {
		$crate::syn::token::TokenKind::Minus
	};
	("*") => {
		$crate::syn::token::TokenKind::Star
	};
	("/") => {
		$crate::syn::token::TokenKind::Slash
	};
	("^") => {
		$crate::syn::token::TokenKind::Caret
	};
	("=") => {
		$crate::syn::token::TokenKind::Equal
	};
	("==") => {
		$crate::syn::token::TokenKind::EqualEqual
	};
	("!=") => {
		$crate::syn::token::TokenKind::NotEqual
	};
	("<") => {
		$crate::syn::token::TokenKind::Less
	};
	("<=") => {
		$crate::syn::token::TokenKind::LessEqual
	};
	(">") => {
		$crate::syn::token::TokenKind::Greater
	};
	(">=") => {
		$crate::syn::token::TokenKind::GreaterEqual
	};
	("(") => {
		$crate::syn::token::TokenKind::OpenParen
	};
	(")") => {
		$crate::syn::token::TokenKind::CloseParen
	};
	("[") => {
		$crate::syn::token::TokenKind::OpenBracket
	};
	("]") => {
		$crate::syn::token::TokenKind::CloseBracket
	};
	(",") => {
		$crate::syn::token::TokenKind::Comma
	};
	(".") => {
		$crate::syn::token::TokenKind::Dot
	};
}

pub(crate) use t;
