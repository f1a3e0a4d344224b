use crate::syn::token::Keyword;
use phf::phf_map;

/// A map from keyword text to the keyword. Lookup is exact-case: the
/// language is case-sensitive.
pub(crate) static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
	"any" => Keyword::Any,
	"ask" => Keyword::Ask,
	"await" => Keyword::Await,
	"bin" => Keyword::Bin,
	"catch" => Keyword::Catch,
	"contains" => Keyword::Contains,
	"dec" => Keyword::Dec,
	"def" => Keyword::Def,
	"do" => Keyword::Do,
	"else" => Keyword::Else,
	"endawait" => Keyword::EndAwait,
	"enddef" => Keyword::EndDef,
	"endif" => Keyword::EndIf,
	"endins" => Keyword::EndIns,
	"endtry" => Keyword::EndTry,
	"endwhile" => Keyword::EndWhile,
	"finally" => Keyword::Finally,
	"halt" => Keyword::Halt,
	"if" => Keyword::If,
	"ins" => Keyword::Ins,
	"jump" => Keyword::Jump,
	"list" => Keyword::List,
	"mark" => Keyword::Mark,
	"nul" => Keyword::Nul,
	"raise" => Keyword::Raise,
	"return" => Keyword::Return,
	"run" => Keyword::Run,
	"say" => Keyword::Say,
	"str" => Keyword::Str,
	"tense" => Keyword::Tense,
	"then" => Keyword::Then,
	"try" => Keyword::Try,
	"while" => Keyword::While,
};
