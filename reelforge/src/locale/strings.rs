use crate::locale::lang::Lang;

/// A line in the folder list segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FolderItem {
    /// Item label.
    pub name: &'static str,
    /// Leading emoji.
    pub icon: &'static str,
}

/// Every piece of on-screen copy for one language.
///
/// Strings may contain `\n` where the layout breaks a headline over two lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LocalizedStrings {
    /// Language of this table.
    pub lang: Lang,
    /// Product title.
    pub product_name: &'static str,
    /// Volume line under the title.
    pub product_subtitle: &'static str,
    /// Glitching highlight above the title.
    pub highlight_text: &'static str,
    /// Cover call to action.
    pub cta_text: &'static str,
    /// Typewriter tagline.
    pub tagline: &'static str,
    /// Cover badge.
    pub limited_edition: &'static str,
    /// Folder card badge.
    pub exclusive: &'static str,
    /// Counter segment label.
    pub exclusive_label: &'static str,
    /// Counter segment headline.
    pub produce_music: &'static str,
    /// Folder list rows.
    pub folder_list: &'static [FolderItem],
    /// First folder header line.
    pub header_line1: &'static str,
    /// Second folder header line.
    pub header_line2: &'static str,
    /// Folder footer.
    pub all_included: &'static str,
    /// Counter unit.
    pub beats_label: &'static str,
    /// Counter caption.
    pub beats_sub_label: &'static str,
    /// Counter badge.
    pub fire_rare: &'static str,
    /// Closing cover badge.
    pub plus_beats: &'static str,
    /// Closing tag line one.
    pub cta_line1: &'static str,
    /// Closing tag line two.
    pub cta_line2: &'static str,
    /// Closing tag line three.
    pub cta_line3: &'static str,
}

static EN: LocalizedStrings = LocalizedStrings {
    lang: Lang::En,
    product_name: "WAVE DETECTOR",
    product_subtitle: "VOL. 1",
    highlight_text: "(+10) BEATS",
    cta_text: "NOW AVAILABLE",
    tagline: "PREMIUM BEATS COLLECTION",
    limited_edition: "🔥 LIMITED EDITION",
    exclusive: "🔥 EXCLUSIVE",
    exclusive_label: "⚡ EXCLUSIVE",
    produce_music: "PRODUCE PROFESSIONAL\nMUSIC",
    folder_list: &[FolderItem {
        name: "100% Royalty-Free",
        icon: "🔥",
    }],
    header_line1: "AND",
    header_line2: "MUCH MORE!",
    all_included: "ALL INCLUDED",
    beats_label: "BEATS",
    beats_sub_label: "High Quality & Rare",
    fire_rare: "🔥 FIRE & RARE",
    plus_beats: "+10 BEATS",
    cta_line1: "👥 TAG",
    cta_line2: "2 RAPPER\nFRIENDS",
    cta_line3: "TO GET THE PACK 🎁",
};

static PT: LocalizedStrings = LocalizedStrings {
    lang: Lang::Pt,
    product_name: "WAVE DETECTOR",
    product_subtitle: "VOL. 1",
    highlight_text: "(+10) BEATS",
    cta_text: "DISPONÍVEL AGORA",
    tagline: "COLEÇÃO PREMIUM DE BEATS",
    limited_edition: "🔥 EDIÇÃO LIMITADA",
    exclusive: "🔥 EXCLUSIVO",
    exclusive_label: "⚡ EXCLUSIVO",
    produce_music: "PRODUZA MÚSICA\nPROFISSIONAL",
    folder_list: &[FolderItem {
        name: "100% Livre de Royalties",
        icon: "🔥",
    }],
    header_line1: "E",
    header_line2: "MUITO MAIS!",
    all_included: "TUDO INCLUÍDO",
    beats_label: "BEATS",
    beats_sub_label: "Alta Qualidade & Raros",
    fire_rare: "🔥 FOGO & RAROS",
    plus_beats: "+10 BEATS",
    cta_line1: "👥 MARQUE",
    cta_line2: "2 AMIGOS\nRAPPERS",
    cta_line3: "PARA RECEBER O PACK 🎁",
};

/// Strings for `lang`.
pub fn lookup(lang: Lang) -> &'static LocalizedStrings {
    match lang {
        Lang::En => &EN,
        Lang::Pt => &PT,
    }
}

impl LocalizedStrings {
    /// Every text field with its key, in declaration order. Folder rows are not included.
    pub fn entries(&self) -> [(&'static str, &'static str); 19] {
        [
            ("product_name", self.product_name),
            ("product_subtitle", self.product_subtitle),
            ("highlight_text", self.highlight_text),
            ("cta_text", self.cta_text),
            ("tagline", self.tagline),
            ("limited_edition", self.limited_edition),
            ("exclusive", self.exclusive),
            ("exclusive_label", self.exclusive_label),
            ("produce_music", self.produce_music),
            ("header_line1", self.header_line1),
            ("header_line2", self.header_line2),
            ("all_included", self.all_included),
            ("beats_label", self.beats_label),
            ("beats_sub_label", self.beats_sub_label),
            ("fire_rare", self.fire_rare),
            ("plus_beats", self.plus_beats),
            ("cta_line1", self.cta_line1),
            ("cta_line2", self.cta_line2),
            ("cta_line3", self.cta_line3),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/locale/strings.rs"]
mod tests;
