#![forbid(unsafe_code)]

//! Built-in UI translations.
//!
//! English defines every key. The other locales translate the visible
//! labels and fall back to English for messages, announcements, and help.

use crate::catalog::{LocaleStrings, StringCatalog};

/// Catalog keys.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const LANGUAGE_LABEL: &str = "language_label";
    pub const SELECTED_WORD: &str = "selected_word";
    pub const INDEX: &str = "index";
    pub const RESET_BUTTON: &str = "reset_button";
    pub const PICK_PATTERN: &str = "pick_pattern";
    pub const OUT_OF_RANGE: &str = "out_of_range";
    pub const INFO_TEXT: &str = "info_text";
    pub const PRIVACY_TOOLTIP: &str = "privacy_tooltip";
    pub const TOGGLE_THEME: &str = "toggle_theme";

    pub const INVALID_WORD_MESSAGE: &str = "invalid_word_message";
    pub const DISABLED_BOX_MESSAGE: &str = "disabled_box_message";
    pub const WORDLIST_LOAD_ERROR: &str = "wordlist_load_error";

    /// `{word}`, `{index}`.
    pub const ANNOUNCE_SELECTED: &str = "announce_selected";
    pub const ANNOUNCE_EMPTY: &str = "announce_empty";
    /// `{value}`.
    pub const ANNOUNCE_OUT_OF_RANGE: &str = "announce_out_of_range";
    /// `{n}`, `{weight}`.
    pub const BOX_LABEL: &str = "box_label";

    pub const WORD_INPUT_LABEL: &str = "word_input_label";
    pub const WORD_INPUT_PLACEHOLDER: &str = "word_input_placeholder";
    pub const BINARY_LABEL: &str = "binary_label";
    pub const THEME_DARK: &str = "theme_dark";
    pub const THEME_LIGHT: &str = "theme_light";
    pub const LOADING: &str = "loading";
    pub const HELP_TITLE: &str = "help_title";
    pub const HELP_BODY: &str = "help_body";
    pub const HELP_CLOSE: &str = "help_close";
    pub const KEY_HINTS: &str = "key_hints";
}

/// Fallback locale.
pub const DEFAULT_LOCALE: &str = "en";

fn core_labels(rows: [(&'static str, &'static str); 10]) -> LocaleStrings {
    let mut strings = LocaleStrings::new();
    for (key, value) in rows {
        strings.insert(key, value);
    }
    strings
}

fn english() -> LocaleStrings {
    use keys::*;
    let mut en = core_labels([
        (TITLE, "BIP39 Word Selector"),
        (SUBTITLE, "Click the boxes to select a word from the BIP39 wordlist"),
        (LANGUAGE_LABEL, "Language:"),
        (SELECTED_WORD, "Selected Word:"),
        (INDEX, "Index:"),
        (RESET_BUTTON, "Reset"),
        (PICK_PATTERN, "Pick a pattern"),
        (OUT_OF_RANGE, "Out of range (max 2048)"),
        (
            INFO_TEXT,
            "Each box represents a bit. The 12 boxes create a number from 0-4095, which maps to one of the 2048 BIP39 words.",
        ),
        (TOGGLE_THEME, "Toggle dark/light mode"),
    ]);
    for (key, value) in [
        (
            PRIVACY_TOOLTIP,
            "Your privacy is protected: everything runs locally. No data is transmitted, stored, or tracked.",
        ),
        (INVALID_WORD_MESSAGE, "Word not found in the wordlist"),
        (
            DISABLED_BOX_MESSAGE,
            "The 2048 box cannot be combined with other boxes. Deselect it first.",
        ),
        (WORDLIST_LOAD_ERROR, "Could not load the {language} wordlist"),
        (ANNOUNCE_SELECTED, "Word selected: {word}, index {index}"),
        (ANNOUNCE_EMPTY, "No pattern selected"),
        (ANNOUNCE_OUT_OF_RANGE, "Value {value} is out of range. Maximum is 2048"),
        (BOX_LABEL, "Bit {n}, value {weight}"),
        (WORD_INPUT_LABEL, "Word:"),
        (WORD_INPUT_PLACEHOLDER, "type a word"),
        (BINARY_LABEL, "Binary:"),
        (THEME_DARK, "Dark"),
        (THEME_LIGHT, "Light"),
        (LOADING, "Loading wordlist"),
        (HELP_TITLE, "About BIP39"),
        (
            HELP_BODY,
            "BIP39 turns a random number into a list of words that is easy to write down.\n\
             Every word encodes 11 bits, so a list holds 2048 words.\n\
             Toggle boxes to build a number from 1 to 2048 and see the word it selects,\n\
             or type a word to see its bit pattern.\n\
             \n\
             The 2048 box stands alone: it cannot be combined with any other box.",
        ),
        (HELP_CLOSE, "Esc to close"),
        (
            KEY_HINTS,
            "Tab focus  Space toggle  r reset  t theme  l language  ? help  q quit",
        ),
    ] {
        en.insert(key, value);
    }
    en
}

/// Catalog with every built-in locale and English as fallback.
#[must_use]
pub fn builtin_catalog() -> StringCatalog {
    use keys::*;
    let mut catalog = StringCatalog::new();
    catalog.add_locale(DEFAULT_LOCALE, english());
    catalog.add_locale(
        "es",
        core_labels([
            (TITLE, "Selector de Palabras BIP39"),
            (SUBTITLE, "Haz clic en las casillas para seleccionar una palabra de la lista BIP39"),
            (LANGUAGE_LABEL, "Idioma:"),
            (SELECTED_WORD, "Palabra Seleccionada:"),
            (INDEX, "Índice:"),
            (RESET_BUTTON, "Reiniciar"),
            (PICK_PATTERN, "Elige un patrón"),
            (OUT_OF_RANGE, "Fuera de rango (máx 2048)"),
            (
                INFO_TEXT,
                "Cada casilla representa un bit. Las 12 casillas crean un número de 0-4095, que corresponde a una de las 2048 palabras BIP39.",
            ),
            (TOGGLE_THEME, "Cambiar modo oscuro/claro"),
        ]),
    );
    catalog.add_locale(
        "fr",
        core_labels([
            (TITLE, "Sélecteur de Mots BIP39"),
            (SUBTITLE, "Cliquez sur les cases pour sélectionner un mot de la liste BIP39"),
            (LANGUAGE_LABEL, "Langue:"),
            (SELECTED_WORD, "Mot Sélectionné:"),
            (INDEX, "Indice:"),
            (RESET_BUTTON, "Réinitialiser"),
            (PICK_PATTERN, "Choisissez un motif"),
            (OUT_OF_RANGE, "Hors limites (max 2048)"),
            (
                INFO_TEXT,
                "Chaque case représente un bit. Les 12 cases créent un nombre de 0-4095, qui correspond à l'un des 2048 mots BIP39.",
            ),
            (TOGGLE_THEME, "Basculer le mode sombre/clair"),
        ]),
    );
    catalog.add_locale(
        "cs",
        core_labels([
            (TITLE, "BIP39 Výběr Slov"),
            (SUBTITLE, "Klikněte na pole pro výběr slova ze seznamu BIP39"),
            (LANGUAGE_LABEL, "Jazyk:"),
            (SELECTED_WORD, "Vybrané slovo:"),
            (INDEX, "Index:"),
            (RESET_BUTTON, "Resetovat"),
            (PICK_PATTERN, "Vyberte vzor"),
            (OUT_OF_RANGE, "Mimo rozsah (max 2048)"),
            (
                INFO_TEXT,
                "Každé pole představuje jeden bit. 12 polí vytvoří číslo od 0 do 4095, které odpovídá jednomu z 2048 slov BIP39.",
            ),
            (TOGGLE_THEME, "Přepnout tmavý/světlý režim"),
        ]),
    );
    catalog.add_locale(
        "it",
        core_labels([
            (TITLE, "Selettore di Parole BIP39"),
            (SUBTITLE, "Clicca sulle caselle per selezionare una parola dalla lista BIP39"),
            (LANGUAGE_LABEL, "Lingua:"),
            (SELECTED_WORD, "Parola Selezionata:"),
            (INDEX, "Indice:"),
            (RESET_BUTTON, "Ripristina"),
            (PICK_PATTERN, "Scegli un pattern"),
            (OUT_OF_RANGE, "Fuori intervallo (max 2048)"),
            (
                INFO_TEXT,
                "Ogni casella rappresenta un bit. Le 12 caselle creano un numero da 0-4095, che corrisponde a una delle 2048 parole BIP39.",
            ),
            (TOGGLE_THEME, "Attiva/disattiva modalità scura/chiara"),
        ]),
    );
    catalog.add_locale(
        "pt",
        core_labels([
            (TITLE, "Seletor de Palavras BIP39"),
            (SUBTITLE, "Clique nas caixas para selecionar uma palavra da lista BIP39"),
            (LANGUAGE_LABEL, "Idioma:"),
            (SELECTED_WORD, "Palavra Selecionada:"),
            (INDEX, "Índice:"),
            (RESET_BUTTON, "Reiniciar"),
            (PICK_PATTERN, "Escolha um padrão"),
            (OUT_OF_RANGE, "Fora do alcance (máx 2048)"),
            (
                INFO_TEXT,
                "Cada caixa representa um bit. As 12 caixas criam um número de 0-4095, que mapeia para uma das 2048 palavras BIP39.",
            ),
            (TOGGLE_THEME, "Alternar modo escuro/claro"),
        ]),
    );
    catalog.add_locale(
        "ja",
        core_labels([
            (TITLE, "BIP39 ワードセレクター"),
            (SUBTITLE, "ボックスをクリックして BIP39 ワードリストから単語を選択"),
            (LANGUAGE_LABEL, "言語："),
            (SELECTED_WORD, "選択された単語："),
            (INDEX, "インデックス："),
            (RESET_BUTTON, "リセット"),
            (PICK_PATTERN, "パターンを選択"),
            (OUT_OF_RANGE, "範囲外（最大 2048）"),
            (
                INFO_TEXT,
                "各ボックスは1ビットを表します。12個のボックスは0-4095の数値を作成し、2048個のBIP39単語の1つにマッピングされます。",
            ),
            (TOGGLE_THEME, "ダークモード/ライトモードを切り替え"),
        ]),
    );
    catalog.add_locale(
        "ko",
        core_labels([
            (TITLE, "BIP39 단어 선택기"),
            (SUBTITLE, "BIP39 단어 목록에서 단어를 선택하려면 상자를 클릭하세요"),
            (LANGUAGE_LABEL, "언어:"),
            (SELECTED_WORD, "선택된 단어:"),
            (INDEX, "인덱스:"),
            (RESET_BUTTON, "재설정"),
            (PICK_PATTERN, "패턴 선택"),
            (OUT_OF_RANGE, "범위 초과 (최대 2048)"),
            (
                INFO_TEXT,
                "각 상자는 비트를 나타냅니다. 12개의 상자는 0-4095 범위의 숫자를 만들며, 2048개의 BIP39 단어 중 하나에 매핑됩니다.",
            ),
            (TOGGLE_THEME, "다크 모드/라이트 모드 전환"),
        ]),
    );
    catalog.add_locale(
        "zh-Hans",
        core_labels([
            (TITLE, "BIP39 单词选择器"),
            (SUBTITLE, "点击方框从 BIP39 单词列表中选择一个单词"),
            (LANGUAGE_LABEL, "语言："),
            (SELECTED_WORD, "选定的单词："),
            (INDEX, "索引："),
            (RESET_BUTTON, "重置"),
            (PICK_PATTERN, "选择一个模式"),
            (OUT_OF_RANGE, "超出范围（最大 2048）"),
            (
                INFO_TEXT,
                "每个方框代表一个位。12 个方框创建一个从 0-4095 的数字，对应 2048 个 BIP39 单词之一。",
            ),
            (TOGGLE_THEME, "切换深色/浅色模式"),
        ]),
    );
    catalog.add_locale(
        "zh-Hant",
        core_labels([
            (TITLE, "BIP39 單詞選擇器"),
            (SUBTITLE, "點擊方框從 BIP39 單詞列表中選擇一個單詞"),
            (LANGUAGE_LABEL, "語言："),
            (SELECTED_WORD, "選定的單詞："),
            (INDEX, "索引："),
            (RESET_BUTTON, "重置"),
            (PICK_PATTERN, "選擇一個模式"),
            (OUT_OF_RANGE, "超出範圍（最大 2048）"),
            (
                INFO_TEXT,
                "每個方框代表一個位。12 個方框創建一個從 0-4095 的數字，對應 2048 個 BIP39 單詞之一。",
            ),
            (TOGGLE_THEME, "切換深色/淺色模式"),
        ]),
    );
    catalog.set_fallback_chain(vec![DEFAULT_LOCALE.to_string()]);
    catalog
}
