use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

/// One Dark colours, reduced to what an entry block uses.
pub struct OneDark;

impl OneDark {
    pub fn entry_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(OneDark::FG);
        skin.bold.set_fg(OneDark::YELLOW);
        skin.italic.set_fg(OneDark::GREEN);

        // Entry headings are `###`.
        skin.headers[2].set_fg(OneDark::BLUE);
        skin.headers[2].add_attr(Attribute::Bold);

        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(OneDark::COMMENT);
        skin.horizontal_rule.set_fg(OneDark::COMMENT);

        skin
    }

    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
    pub const CYAN: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    }; // #56B6C2
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370
}
