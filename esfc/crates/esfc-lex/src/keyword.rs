//! Keywords recognized by value on `keyid` tokens.
//!
//! The lexer makes no keyword/identifier distinction: every word is a
//! `keyid` token. Grammar rules look keywords up by value through
//! [`Keyword::lookup`] or [`Token::keyword`](crate::Token::keyword).

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// ECMAScript and TypeScript reserved and contextual words
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    /// `abstract`
    Abstract,
    /// `accessor`
    Accessor,
    /// `any`
    Any,
    /// `as`
    As,
    /// `assert`
    Assert,
    /// `asserts`
    Asserts,
    /// `async`
    Async,
    /// `await`
    Await,
    /// `bigint`
    Bigint,
    /// `boolean`
    Boolean,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `constructor`
    Constructor,
    /// `continue`
    Continue,
    /// `debugger`
    Debugger,
    /// `declare`
    Declare,
    /// `default`
    Default,
    /// `delete`
    Delete,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `enum`
    Enum,
    /// `export`
    Export,
    /// `extends`
    Extends,
    /// `false`
    False,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `from`
    From,
    /// `function`
    Function,
    /// `get`
    Get,
    /// `global`
    Global,
    /// `if`
    If,
    /// `implements`
    Implements,
    /// `import`
    Import,
    /// `in`
    In,
    /// `infer`
    Infer,
    /// `instanceof`
    Instanceof,
    /// `interface`
    Interface,
    /// `is`
    Is,
    /// `keyof`
    Keyof,
    /// `let`
    Let,
    /// `module`
    Module,
    /// `namespace`
    Namespace,
    /// `never`
    Never,
    /// `new`
    New,
    /// `null`
    Null,
    /// `number`
    Number,
    /// `object`
    Object,
    /// `of`
    Of,
    /// `out`
    Out,
    /// `override`
    Override,
    /// `package`
    Package,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `public`
    Public,
    /// `readonly`
    Readonly,
    /// `require`
    Require,
    /// `return`
    Return,
    /// `satisfies`
    Satisfies,
    /// `set`
    Set,
    /// `static`
    Static,
    /// `string`
    String,
    /// `super`
    Super,
    /// `switch`
    Switch,
    /// `symbol`
    Symbol,
    /// `this`
    This,
    /// `throw`
    Throw,
    /// `true`
    True,
    /// `try`
    Try,
    /// `type`
    Type,
    /// `typeof`
    Typeof,
    /// `undefined`
    Undefined,
    /// `unique`
    Unique,
    /// `unknown`
    Unknown,
    /// `using`
    Using,
    /// `var`
    Var,
    /// `void`
    Void,
    /// `while`
    While,
    /// `with`
    With,
    /// `yield`
    Yield,
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("abstract", Keyword::Abstract),
    ("accessor", Keyword::Accessor),
    ("any", Keyword::Any),
    ("as", Keyword::As),
    ("assert", Keyword::Assert),
    ("asserts", Keyword::Asserts),
    ("async", Keyword::Async),
    ("await", Keyword::Await),
    ("bigint", Keyword::Bigint),
    ("boolean", Keyword::Boolean),
    ("break", Keyword::Break),
    ("case", Keyword::Case),
    ("catch", Keyword::Catch),
    ("class", Keyword::Class),
    ("const", Keyword::Const),
    ("constructor", Keyword::Constructor),
    ("continue", Keyword::Continue),
    ("debugger", Keyword::Debugger),
    ("declare", Keyword::Declare),
    ("default", Keyword::Default),
    ("delete", Keyword::Delete),
    ("do", Keyword::Do),
    ("else", Keyword::Else),
    ("enum", Keyword::Enum),
    ("export", Keyword::Export),
    ("extends", Keyword::Extends),
    ("false", Keyword::False),
    ("finally", Keyword::Finally),
    ("for", Keyword::For),
    ("from", Keyword::From),
    ("function", Keyword::Function),
    ("get", Keyword::Get),
    ("global", Keyword::Global),
    ("if", Keyword::If),
    ("implements", Keyword::Implements),
    ("import", Keyword::Import),
    ("in", Keyword::In),
    ("infer", Keyword::Infer),
    ("instanceof", Keyword::Instanceof),
    ("interface", Keyword::Interface),
    ("is", Keyword::Is),
    ("keyof", Keyword::Keyof),
    ("let", Keyword::Let),
    ("module", Keyword::Module),
    ("namespace", Keyword::Namespace),
    ("never", Keyword::Never),
    ("new", Keyword::New),
    ("null", Keyword::Null),
    ("number", Keyword::Number),
    ("object", Keyword::Object),
    ("of", Keyword::Of),
    ("out", Keyword::Out),
    ("override", Keyword::Override),
    ("package", Keyword::Package),
    ("private", Keyword::Private),
    ("protected", Keyword::Protected),
    ("public", Keyword::Public),
    ("readonly", Keyword::Readonly),
    ("require", Keyword::Require),
    ("return", Keyword::Return),
    ("satisfies", Keyword::Satisfies),
    ("set", Keyword::Set),
    ("static", Keyword::Static),
    ("string", Keyword::String),
    ("super", Keyword::Super),
    ("switch", Keyword::Switch),
    ("symbol", Keyword::Symbol),
    ("this", Keyword::This),
    ("throw", Keyword::Throw),
    ("true", Keyword::True),
    ("try", Keyword::Try),
    ("type", Keyword::Type),
    ("typeof", Keyword::Typeof),
    ("undefined", Keyword::Undefined),
    ("unique", Keyword::Unique),
    ("unknown", Keyword::Unknown),
    ("using", Keyword::Using),
    ("var", Keyword::Var),
    ("void", Keyword::Void),
    ("while", Keyword::While),
    ("with", Keyword::With),
    ("yield", Keyword::Yield),
];

lazy_static::lazy_static! {
    static ref TABLE: FxHashMap<&'static str, Keyword> = KEYWORDS.iter().copied().collect();
}

impl Keyword {
    /// Every keyword, in alphabetical order
    pub fn all() -> impl Iterator<Item = Keyword> {
        KEYWORDS.iter().map(|(_, keyword)| *keyword)
    }

    /// Find the keyword spelled by `word`
    ///
    /// # Example
    ///
    /// ```
    /// use esfc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::lookup("instanceof"), Some(Keyword::Instanceof));
    /// assert_eq!(Keyword::lookup("Instanceof"), None);
    /// assert_eq!(Keyword::lookup("foo"), None);
    /// ```
    pub fn lookup(word: &str) -> Option<Keyword> {
        TABLE.get(word).copied()
    }

    /// Source spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        // KEYWORDS is declared in variant order.
        KEYWORDS[*self as usize].0
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::lookup(s).ok_or(())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
