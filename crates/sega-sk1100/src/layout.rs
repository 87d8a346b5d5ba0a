//! SK-1100 key layouts.
//!
//! Both keyboards share one matrix. They differ only in key legends and in
//! the alternate character layer: katakana on the Japanese keyboard,
//! accented letters on the export keyboard.
//!
//! Matrix layout (port A rows, bit 0 first):
//!
//! | Row | b0 | b1 | b2 | b3 | b4      | b5   | b6     | b7 |
//! |-----|----|----|----|----|---------|------|--------|----|
//! | 0   | 1  | Q  | A  | Z  | ENG     | ,    | K      | I  |
//! | 1   | 2  | W  | S  | X  | SPC     | .    | L      | O  |
//! | 2   | 3  | E  | D  | C  | CLR     | /    | ;      | P  |
//! | 3   | 4  | R  | F  | V  | INS/DEL | π    | :      | @  |
//! | 4   | 5  | T  | G  | B  |         | ↓    | ]      | [  |
//! | 5   | 6  | Y  | H  | N  |         | ←    | CR     |    |
//! | 6   | 7  | U  | J  | M  |         | →    | ↑      |    |
//!
//! Port B rows (low nibble):
//!
//! | Row | b0    | b1    | b2   | b3    |
//! |-----|-------|-------|------|-------|
//! | 0   | 8     |       |      |       |
//! | 1   | 9     |       |      |       |
//! | 2   | 0     |       |      |       |
//! | 3   | -     |       |      |       |
//! | 4   | ^     |       |      |       |
//! | 5   | ¥     |       |      | FUNC  |
//! | 6   | BREAK | GRAPH | CTRL | SHIFT |

use crate::matrix::{KeyPosition, ScanPort};

/// Physical key on the SK-1100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sk1100Key {
    // PA row 0
    N1,
    Q,
    A,
    Z,
    /// ENG/KANA on the Japanese keyboard, ENG DIER'S on export.
    Eng,
    Comma,
    K,
    I,
    // PA row 1
    N2,
    W,
    S,
    X,
    Space,
    Period,
    L,
    O,
    // PA row 2
    N3,
    E,
    D,
    C,
    ClrHome,
    Slash,
    Semicolon,
    P,
    // PA row 3
    N4,
    R,
    F,
    V,
    InsDel,
    Pi,
    Colon,
    At,
    // PA row 4
    N5,
    T,
    G,
    B,
    Down,
    RightBracket,
    LeftBracket,
    // PA row 5
    N6,
    Y,
    H,
    N,
    Left,
    Return,
    // PA row 6
    N7,
    U,
    J,
    M,
    Right,
    Up,
    // PB rows
    N8,
    N9,
    N0,
    Minus,
    Caret,
    Yen,
    Func,
    Break,
    Graph,
    Ctrl,
    Shift,
}

impl Sk1100Key {
    /// Every key, in matrix order.
    pub const ALL: [Self; 62] = [
        Self::N1,
        Self::Q,
        Self::A,
        Self::Z,
        Self::Eng,
        Self::Comma,
        Self::K,
        Self::I,
        Self::N2,
        Self::W,
        Self::S,
        Self::X,
        Self::Space,
        Self::Period,
        Self::L,
        Self::O,
        Self::N3,
        Self::E,
        Self::D,
        Self::C,
        Self::ClrHome,
        Self::Slash,
        Self::Semicolon,
        Self::P,
        Self::N4,
        Self::R,
        Self::F,
        Self::V,
        Self::InsDel,
        Self::Pi,
        Self::Colon,
        Self::At,
        Self::N5,
        Self::T,
        Self::G,
        Self::B,
        Self::Down,
        Self::RightBracket,
        Self::LeftBracket,
        Self::N6,
        Self::Y,
        Self::H,
        Self::N,
        Self::Left,
        Self::Return,
        Self::N7,
        Self::U,
        Self::J,
        Self::M,
        Self::Right,
        Self::Up,
        Self::N8,
        Self::N9,
        Self::N0,
        Self::Minus,
        Self::Caret,
        Self::Yen,
        Self::Func,
        Self::Break,
        Self::Graph,
        Self::Ctrl,
        Self::Shift,
    ];

    /// Matrix position of this key.
    #[must_use]
    pub const fn position(self) -> KeyPosition {
        const fn a(row: u8, bit: u8) -> KeyPosition {
            KeyPosition::new(ScanPort::A, row, bit)
        }
        const fn b(row: u8, bit: u8) -> KeyPosition {
            KeyPosition::new(ScanPort::B, row, bit)
        }

        match self {
            Self::N1 => a(0, 0),
            Self::Q => a(0, 1),
            Self::A => a(0, 2),
            Self::Z => a(0, 3),
            Self::Eng => a(0, 4),
            Self::Comma => a(0, 5),
            Self::K => a(0, 6),
            Self::I => a(0, 7),

            Self::N2 => a(1, 0),
            Self::W => a(1, 1),
            Self::S => a(1, 2),
            Self::X => a(1, 3),
            Self::Space => a(1, 4),
            Self::Period => a(1, 5),
            Self::L => a(1, 6),
            Self::O => a(1, 7),

            Self::N3 => a(2, 0),
            Self::E => a(2, 1),
            Self::D => a(2, 2),
            Self::C => a(2, 3),
            Self::ClrHome => a(2, 4),
            Self::Slash => a(2, 5),
            Self::Semicolon => a(2, 6),
            Self::P => a(2, 7),

            Self::N4 => a(3, 0),
            Self::R => a(3, 1),
            Self::F => a(3, 2),
            Self::V => a(3, 3),
            Self::InsDel => a(3, 4),
            Self::Pi => a(3, 5),
            Self::Colon => a(3, 6),
            Self::At => a(3, 7),

            Self::N5 => a(4, 0),
            Self::T => a(4, 1),
            Self::G => a(4, 2),
            Self::B => a(4, 3),
            Self::Down => a(4, 5),
            Self::RightBracket => a(4, 6),
            Self::LeftBracket => a(4, 7),

            Self::N6 => a(5, 0),
            Self::Y => a(5, 1),
            Self::H => a(5, 2),
            Self::N => a(5, 3),
            Self::Left => a(5, 5),
            Self::Return => a(5, 6),

            Self::N7 => a(6, 0),
            Self::U => a(6, 1),
            Self::J => a(6, 2),
            Self::M => a(6, 3),
            Self::Right => a(6, 5),
            Self::Up => a(6, 6),

            Self::N8 => b(0, 0),
            Self::N9 => b(1, 0),
            Self::N0 => b(2, 0),
            Self::Minus => b(3, 0),
            Self::Caret => b(4, 0),
            Self::Yen => b(5, 0),
            Self::Func => b(5, 3),
            Self::Break => b(6, 0),
            Self::Graph => b(6, 1),
            Self::Ctrl => b(6, 2),
            Self::Shift => b(6, 3),
        }
    }

    /// Host keys that drive this key. Shared by both layouts.
    #[must_use]
    pub const fn host_keys(self) -> &'static [HostKey] {
        match self {
            Self::N1 => &[HostKey::Digit1],
            Self::N2 => &[HostKey::Digit2],
            Self::N3 => &[HostKey::Digit3],
            Self::N4 => &[HostKey::Digit4],
            Self::N5 => &[HostKey::Digit5],
            Self::N6 => &[HostKey::Digit6],
            Self::N7 => &[HostKey::Digit7],
            Self::N8 => &[HostKey::Digit8],
            Self::N9 => &[HostKey::Digit9],
            Self::N0 => &[HostKey::Digit0],
            Self::Q => &[HostKey::KeyQ],
            Self::W => &[HostKey::KeyW],
            Self::E => &[HostKey::KeyE],
            Self::R => &[HostKey::KeyR],
            Self::T => &[HostKey::KeyT],
            Self::Y => &[HostKey::KeyY],
            Self::U => &[HostKey::KeyU],
            Self::I => &[HostKey::KeyI],
            Self::O => &[HostKey::KeyO],
            Self::P => &[HostKey::KeyP],
            Self::A => &[HostKey::KeyA],
            Self::S => &[HostKey::KeyS],
            Self::D => &[HostKey::KeyD],
            Self::F => &[HostKey::KeyF],
            Self::G => &[HostKey::KeyG],
            Self::H => &[HostKey::KeyH],
            Self::J => &[HostKey::KeyJ],
            Self::K => &[HostKey::KeyK],
            Self::L => &[HostKey::KeyL],
            Self::Z => &[HostKey::KeyZ],
            Self::X => &[HostKey::KeyX],
            Self::C => &[HostKey::KeyC],
            Self::V => &[HostKey::KeyV],
            Self::B => &[HostKey::KeyB],
            Self::N => &[HostKey::KeyN],
            Self::M => &[HostKey::KeyM],
            Self::Eng => &[HostKey::AltRight],
            Self::Comma => &[HostKey::Comma],
            Self::Period => &[HostKey::Period],
            Self::Slash => &[HostKey::Slash],
            Self::Semicolon => &[HostKey::Semicolon],
            Self::Colon => &[HostKey::Quote],
            Self::At => &[HostKey::BracketLeft],
            Self::LeftBracket => &[HostKey::BracketRight],
            Self::RightBracket => &[HostKey::Backslash],
            Self::Pi => &[HostKey::IntlBackslash],
            Self::Minus => &[HostKey::Minus],
            Self::Caret => &[HostKey::Equal],
            Self::Yen => &[HostKey::Backspace],
            Self::Space => &[HostKey::Space],
            Self::Return => &[HostKey::Enter],
            Self::ClrHome => &[HostKey::Insert],
            Self::InsDel => &[HostKey::Delete],
            Self::Up => &[HostKey::ArrowUp],
            Self::Down => &[HostKey::ArrowDown],
            Self::Left => &[HostKey::ArrowLeft],
            Self::Right => &[HostKey::ArrowRight],
            Self::Func => &[HostKey::Tab],
            Self::Break => &[HostKey::Escape],
            Self::Graph => &[HostKey::AltLeft],
            Self::Ctrl => &[HostKey::ControlLeft],
            Self::Shift => &[HostKey::ShiftLeft, HostKey::ShiftRight],
        }
    }
}

/// Host keyboard key, by physical position on a standard PC keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKey {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    Minus,
    Equal,
    Backspace,
    Tab,
    BracketLeft,
    BracketRight,
    Backslash,
    IntlBackslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Space,
    Enter,
    Escape,
    Insert,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    AltLeft,
    AltRight,
}

/// Characters a key produces in each modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChars {
    pub normal: Option<char>,
    pub shifted: Option<char>,
    /// Alternate layer (katakana or accented letters).
    pub alt: Option<char>,
    pub alt_shifted: Option<char>,
}

impl KeyChars {
    /// A key with no character (modifiers, cursor keys).
    pub const NONE: Self = Self::new(None, None, None, None);

    #[must_use]
    pub const fn new(
        normal: Option<char>,
        shifted: Option<char>,
        alt: Option<char>,
        alt_shifted: Option<char>,
    ) -> Self {
        Self {
            normal,
            shifted,
            alt,
            alt_shifted,
        }
    }

    /// The key that only types `ch`.
    #[must_use]
    pub const fn single(ch: char) -> Self {
        Self::new(Some(ch), None, None, None)
    }
}

/// One entry of a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    pub key: Sk1100Key,
    /// Key-top legend, BASIC keyword included.
    pub label: &'static str,
    pub host: &'static [HostKey],
    pub chars: KeyChars,
}

/// How the alternate layer is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltMode {
    /// Pressing the ENG key toggles the layer (Japanese kana lock).
    Lock,
    /// The layer is active while the ENG key is held (export).
    Hold,
}

/// Modifier state needed to type a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: Sk1100Key,
    pub shift: bool,
    pub alt: bool,
}

/// A regional key layout.
#[derive(Debug)]
pub struct Layout {
    pub name: &'static str,
    pub alt_mode: AltMode,
    pub keys: &'static [KeyDef],
}

impl Layout {
    /// Table entry for `key`.
    #[must_use]
    pub fn get(&self, key: Sk1100Key) -> Option<&KeyDef> {
        self.keys.iter().find(|def| def.key == key)
    }

    /// The SK-1100 key driven by a host key.
    #[must_use]
    pub fn key_for_host(&self, host: HostKey) -> Option<Sk1100Key> {
        self.keys
            .iter()
            .find(|def| def.host.contains(&host))
            .map(|def| def.key)
    }

    /// How to type `ch`. A newline types as carriage return.
    ///
    /// Layers are searched normal, shifted, alternate, alternate-shifted,
    /// so a character on more than one key resolves to the plainest stroke.
    #[must_use]
    pub fn stroke_for_char(&self, ch: char) -> Option<KeyStroke> {
        let ch = if ch == '\n' { '\r' } else { ch };
        let layers: [(fn(&KeyChars) -> Option<char>, bool, bool); 4] = [
            (|c: &KeyChars| c.normal, false, false),
            (|c: &KeyChars| c.shifted, true, false),
            (|c: &KeyChars| c.alt, false, true),
            (|c: &KeyChars| c.alt_shifted, true, true),
        ];
        layers.iter().find_map(|&(layer, shift, alt)| {
            self.keys
                .iter()
                .find(|def| layer(&def.chars) == Some(ch))
                .map(|def| KeyStroke {
                    key: def.key,
                    shift,
                    alt,
                })
        })
    }
}

const fn def(key: Sk1100Key, label: &'static str, chars: KeyChars) -> KeyDef {
    KeyDef {
        key,
        label,
        host: key.host_keys(),
        chars,
    }
}

const fn ch(
    normal: char,
    shifted: Option<char>,
    alt: Option<char>,
    alt_shifted: Option<char>,
) -> KeyChars {
    KeyChars::new(Some(normal), shifted, alt, alt_shifted)
}

/// Japanese keyboard: katakana alternate layer behind a kana lock.
pub static DOMESTIC: Layout = Layout {
    name: "sega_sk1100",
    alt_mode: AltMode::Lock,
    keys: &DOMESTIC_KEYS,
};

/// Export keyboard: accented letters while ENG DIER'S is held.
pub static EXPORT: Layout = Layout {
    name: "sega_sk1100e",
    alt_mode: AltMode::Hold,
    keys: &EXPORT_KEYS,
};

static DOMESTIC_KEYS: [KeyDef; 62] = {
    use Sk1100Key as K;
    [
        def(K::N1, "1 ヌ  !  GOTO", ch('1', Some('!'), Some('ヌ'), None)),
        def(K::Q, "Q タ  REM", ch('Q', Some('q'), Some('タ'), None)),
        def(K::A, "A チ  CHR$(", ch('A', Some('a'), Some('チ'), None)),
        def(K::Z, "Z ツ  ASC(", ch('Z', Some('z'), Some('ツ'), Some('ッ'))),
        def(K::Eng, "英数/カナ (Alphanumerics/Kana)", KeyChars::NONE),
        def(K::Comma, ", ネ  < 、  SGN(", ch(',', Some('<'), Some('ネ'), Some('、'))),
        def(K::K, "K ノ  COS(", ch('K', Some('k'), Some('ノ'), None)),
        def(K::I, "I ニ  TO", ch('I', Some('i'), Some('ニ'), None)),
        def(K::N2, "2 フ  \"  GOSUB", ch('2', Some('"'), Some('フ'), None)),
        def(K::W, "W テ  DATA", ch('W', Some('w'), Some('テ'), None)),
        def(K::S, "S ト  STR$(", ch('S', Some('s'), Some('ト'), None)),
        def(K::X, "X サ  VAL(", ch('X', Some('x'), Some('サ'), None)),
        def(K::Space, "SPC", KeyChars::single(' ')),
        def(K::Period, ". ル  > 。  RND(", ch('.', Some('>'), Some('ル'), Some('。'))),
        def(K::L, "L リ  TAN(", ch('L', Some('l'), Some('リ'), None)),
        def(K::O, "O ラ  STEP", ch('O', Some('o'), Some('ラ'), None)),
        def(K::N3, "3 ア  #  RETURN", ch('3', Some('#'), Some('ア'), Some('ァ'))),
        def(K::E, "E イ  READ", ch('E', Some('e'), Some('イ'), Some('ィ'))),
        def(K::D, "D シ  TIME$", ch('D', Some('d'), Some('シ'), None)),
        def(K::C, "C ソ  SQR(", ch('C', Some('c'), Some('ソ'), None)),
        def(K::ClrHome, "Clr  Home  CLS", KeyChars::NONE),
        def(K::Slash, "/ メ  ?  FRE", ch('/', Some('?'), Some('メ'), None)),
        def(K::Semicolon, "; レ  +  RAD(", ch(';', Some('+'), Some('レ'), None)),
        def(K::P, "P セ  NEXT", ch('P', Some('p'), Some('セ'), None)),
        def(K::N4, "4 ウ  $  SCREEN", ch('4', Some('$'), Some('ウ'), Some('ゥ'))),
        def(K::R, "R ス  RESTORE", ch('R', Some('r'), Some('ス'), None)),
        def(K::F, "F ハ  LEFT$(", ch('F', Some('f'), Some('ハ'), None)),
        def(K::V, "V ヒ  EXP(", ch('V', Some('v'), Some('ヒ'), None)),
        def(K::InsDel, "Del  Ins  DELETE", KeyChars::single('\u{8}')),
        def(K::Pi, "ロ  π  PI", KeyChars::new(None, Some('π'), Some('ロ'), None)),
        def(K::Colon, ": ケ  *  PRINT", ch(':', Some('*'), Some('ケ'), None)),
        def(K::At, "@ ゛  `  IF", ch('@', Some('`'), Some('゛'), None)),
        def(K::N5, "5 エ  %  POSITION", ch('5', Some('%'), Some('エ'), Some('ェ'))),
        def(K::T, "T カ  INPUT", ch('T', Some('t'), Some('カ'), None)),
        def(K::G, "G キ  RIGHT$(", ch('G', Some('g'), Some('キ'), None)),
        def(K::B, "B コ  LOG(", ch('B', Some('b'), Some('コ'), None)),
        def(K::Down, "↓", KeyChars::NONE),
        def(K::RightBracket, "] ム  } 」  LIST", ch(']', Some('}'), Some('ム'), Some('」'))),
        def(K::LeftBracket, "[ ゜  { 「  THEN", ch('[', Some('{'), Some('゜'), Some('「'))),
        def(K::N6, "6 オ  &  COLOR", ch('6', Some('&'), Some('オ'), Some('ォ'))),
        def(K::Y, "Y ン  DIM", ch('Y', Some('y'), Some('ン'), None)),
        def(K::H, "H ク  MID$(", ch('H', Some('h'), Some('ク'), None)),
        def(K::N, "N ミ  ABS(", ch('N', Some('n'), Some('ミ'), None)),
        def(K::Left, "←", KeyChars::NONE),
        def(K::Return, "CR", KeyChars::single('\r')),
        def(K::N7, "7 ヤ  '  LINE", ch('7', Some('\''), Some('ヤ'), Some('ャ'))),
        def(K::U, "U ナ  FOR", ch('U', Some('u'), Some('ナ'), None)),
        def(K::J, "J マ  SIN(", ch('J', Some('j'), Some('マ'), None)),
        def(K::M, "M モ  INT(", ch('M', Some('m'), Some('モ'), None)),
        def(K::Right, "→", KeyChars::NONE),
        def(K::Up, "↑", KeyChars::NONE),
        def(K::N8, "8 ユ  (  PSET", ch('8', Some('('), Some('ユ'), Some('ュ'))),
        def(K::N9, "9 ヨ  )  SAVE\"", ch('9', Some(')'), Some('ヨ'), Some('ョ'))),
        def(K::N0, "0 ワ  LOAD\"", ch('0', None, Some('ワ'), None)),
        def(K::Minus, "- ホ  =  VERIFY\"", ch('-', Some('='), Some('ホ'), None)),
        def(K::Caret, "^ ヘ  ~  AUTO", ch('^', Some('~'), Some('ヘ'), None)),
        def(K::Yen, "¥ ー  |  RUN", ch('¥', Some('|'), Some('ー'), None)),
        def(K::Func, "Func", KeyChars::NONE),
        def(K::Break, "Break", KeyChars::NONE),
        def(K::Graph, "Graph", KeyChars::NONE),
        def(K::Ctrl, "Ctrl", KeyChars::NONE),
        def(K::Shift, "Shift", KeyChars::NONE),
    ]
};

static EXPORT_KEYS: [KeyDef; 62] = {
    use Sk1100Key as K;
    [
        def(K::N1, "1  !  Â  GOTO", ch('1', Some('!'), Some('Â'), None)),
        def(K::Q, "Q  Á  REM", ch('Q', Some('q'), Some('Á'), None)),
        def(K::A, "A  Ä  CHR$(", ch('A', Some('a'), Some('Ä'), None)),
        def(K::Z, "Z  μ  ASC(", ch('Z', Some('z'), Some('μ'), None)),
        def(K::Eng, "Eng Dier's", KeyChars::NONE),
        def(K::Comma, ",  <  Ū  SGN(", ch(',', Some('<'), Some('Ū'), None)),
        def(K::K, "K  Ü  COS(", ch('K', Some('k'), Some('Ü'), None)),
        def(K::I, "I  Ù  TO", ch('I', Some('i'), Some('Ù'), None)),
        def(K::N2, "2  \"  Ǎ  GOSUB", ch('2', Some('"'), Some('Ă'), None)),
        def(K::W, "W  À  DATA", ch('W', Some('w'), Some('À'), None)),
        def(K::S, "S  Å  STR$(", ch('S', Some('s'), Some('Å'), None)),
        def(K::X, "X  Λ  VAL(", ch('X', Some('x'), Some('Λ'), None)),
        def(K::Space, "SPC", KeyChars::single(' ')),
        def(K::Period, ".  >  Î  RND(", ch('.', Some('>'), Some('Î'), None)),
        def(K::L, "L  Í  TAN(", ch('L', Some('l'), Some('Í'), None)),
        def(K::O, "O  Ì  STEP", ch('O', Some('o'), Some('Ì'), None)),
        def(K::N3, "3  #  Ê  RETURN", ch('3', Some('#'), Some('Ê'), None)),
        def(K::E, "E  É  READ", ch('E', Some('e'), Some('É'), None)),
        def(K::D, "D  Ã  TIME$", ch('D', Some('d'), Some('Ã'), None)),
        def(K::C, "C  Ç  SQR(", ch('C', Some('c'), Some('Ç'), None)),
        def(K::ClrHome, "Clr  Home  CLS", KeyChars::NONE),
        def(K::Slash, "/  ?  Ī  FRE", ch('/', Some('?'), Some('Ī'), None)),
        def(K::Semicolon, ";  +  Ï  RAD(", ch(';', Some('+'), Some('Ï'), None)),
        def(K::P, "P  Ó  NEXT", ch('P', Some('p'), Some('Ó'), None)),
        def(K::N4, "4  $  Ě  SCREEN", ch('4', Some('$'), Some('Ě'), None)),
        def(K::R, "R  È  RESTORE", ch('R', Some('r'), Some('È'), None)),
        def(K::F, "F  Ā  LEFT$(", ch('F', Some('f'), Some('Ā'), None)),
        def(K::V, "V  ¿  EXP(", ch('V', Some('v'), Some('¿'), None)),
        def(K::InsDel, "Del  Ins  DELETE", KeyChars::single('\u{8}')),
        def(K::Pi, "Õ  π  PI", ch('Õ', Some('π'), None, None)),
        def(K::Colon, ":  *  Ö  PRINT", ch(':', Some('*'), Some('Ö'), None)),
        def(K::At, "@  `  Ò  IF", ch('@', Some('`'), Some('Ò'), None)),
        def(K::N5, "5  %  Ë  POSITION", ch('5', Some('%'), Some('Ë'), None)),
        def(K::T, "T  Ñ  INPUT", ch('T', Some('t'), Some('Ñ'), None)),
        def(K::G, "G  α  RIGHT$(", ch('G', Some('g'), Some('α'), None)),
        def(K::B, "B  ¡  LOG(", ch('B', Some('b'), Some('¡'), None)),
        def(K::Down, "↓", KeyChars::NONE),
        def(K::RightBracket, "]  }  Σ  LIST", ch(']', Some('}'), Some('Σ'), None)),
        def(K::LeftBracket, "[  {  Φ  THEN", ch('[', Some('{'), Some('Φ'), None)),
        def(K::N6, "6  &  Ē  COLOR", ch('6', Some('&'), Some('Ē'), None)),
        def(K::Y, "Y  Nˆ  DIM", ch('Y', Some('y'), None, None)),
        def(K::H, "H  β  MID$(", ch('H', Some('h'), Some('β'), None)),
        def(K::N, "N  Æ  ABS(", ch('N', Some('n'), Some('Æ'), None)),
        def(K::Left, "←", KeyChars::NONE),
        def(K::Return, "CR", KeyChars::single('\r')),
        def(K::N7, "7  '  Û  LINE", ch('7', Some('\''), Some('Û'), None)),
        def(K::U, "U  Ú  FOR", ch('U', Some('u'), Some('Ú'), None)),
        def(K::J, "J  θ  SIN(", ch('J', Some('j'), Some('θ'), None)),
        def(K::M, "M  Ω  INT(", ch('M', Some('m'), Some('Ω'), None)),
        def(K::Right, "→", KeyChars::NONE),
        def(K::Up, "↑", KeyChars::NONE),
        def(K::N8, "8  (  Ǔ  PSET", ch('8', Some('('), Some('Ǔ'), None)),
        def(K::N9, "9  )  Ǐ  SAVE\"", ch('9', Some(')'), Some('Ǐ'), None)),
        def(K::N0, "0  Ô  LOAD\"", KeyChars::single('0')),
        def(K::Minus, "-  =  Ǒ  VERIFY\"", ch('-', Some('='), Some('Ǒ'), None)),
        def(K::Caret, "^  ~  O¸  AUTO", ch('^', Some('~'), None, None)),
        def(K::Yen, "¥  |  £  RUN", ch('¥', Some('|'), Some('£'), None)),
        def(K::Func, "Func", KeyChars::NONE),
        def(K::Break, "Break", KeyChars::NONE),
        def(K::Graph, "Graph", KeyChars::NONE),
        def(K::Ctrl, "Ctrl", KeyChars::NONE),
        def(K::Shift, "Shift", KeyChars::NONE),
    ]
};
