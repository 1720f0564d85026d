//! Minimal embedded initials table.
//!
//! Covers a few hundred of the most frequent hanzi so pinyin search works
//! without a generated charmap. A full table is loaded from disk by the infra
//! layer when configured.

use super::initials::InitialsTable;

// Polyphonic characters use their most common reading.
const COMMON_HANZI: &[(char, &str)] = &[
    ('a', "啊阿爱安按暗岸案奥"),
    ('b', "吧八把白百班办半帮包保报北被本比笔必边变便表别病不部步"),
    ('c', "才菜参草层茶查差产长常场唱车成城程吃出处穿传床创春从次错"),
    ('d', "大打带但单当到道得的等地第点电店定东动都读对多"),
    ('e', "儿而二饿"),
    ('f', "发法反饭方房放飞非分风服父复"),
    ('g', "该改干感刚高告哥歌个给跟更工公共狗够古关观管光广贵国果过"),
    ('h', "还孩海害好号喝和河黑很红后候湖花话化画怀欢换黄回会活火或"),
    ('j', "机鸡几己记家加价间见件建将讲交叫教接街节姐解今金进近经精九酒就旧举句觉"),
    ('k', "开看考靠科可课空口哭快块"),
    ('l', "来蓝老乐了累冷离里理力立连脸两亮料林零领六龙楼路旅绿论"),
    ('m', "妈马吗买卖满慢忙毛么没每美门们面民明名母木目"),
    ('n', "拿哪那奶男南难呢内能你年念鸟您牛农女"),
    ('o', "哦欧"),
    ('p', "怕拍排旁跑朋皮片票平破"),
    ('q', "七期其起气汽千前钱墙桥亲青清情请秋去全却"),
    ('r', "然让热人认日容肉如入"),
    ('s', "三色山上少绍谁身深什神生声十时识实使是事市试手首书树水睡说思死四送诉算岁所"),
    ('t', "他她它台太谈汤堂特题体天条跳听停通同头图土团推"),
    ('w', "外完玩晚万王网往忘望为位文问我屋无五午物务"),
    ('x', "西希息习洗喜系下先现线想向小笑些写谢新心信星行兴姓休学雪"),
    ('y', "呀牙言眼羊阳样要药也业夜一衣医已以意因音银应英影用有友又右鱼语雨元园远院月越云"),
    ('z', "在再早怎站张找照这者真正知直只纸中种重住主注准字自总走最作坐做"),
];

impl InitialsTable {
    /// Table of common hanzi compiled into the binary.
    ///
    /// # Examples
    ///
    /// ```
    /// use tw_core::pinyin::InitialsTable;
    ///
    /// let table = InitialsTable::builtin();
    /// assert_eq!(table.initial('你'), Some('n'));
    /// assert_eq!(table.initial('好'), Some('h'));
    /// ```
    pub fn builtin() -> Self {
        let mut table = InitialsTable::new();
        for (initial, glyphs) in COMMON_HANZI {
            for glyph in glyphs.chars() {
                table.insert(glyph, *initial);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::transliterator::Transliterator;

    #[test]
    fn builtin_groups_have_no_conflicting_glyphs() {
        let mut seen = std::collections::HashMap::new();
        for (initial, glyphs) in COMMON_HANZI {
            for glyph in glyphs.chars() {
                if let Some(prev) = seen.insert(glyph, *initial) {
                    panic!("{glyph} listed under both {prev} and {initial}");
                }
            }
        }
    }

    #[test]
    fn builtin_transliterates_common_phrase() {
        let table = InitialsTable::builtin();
        assert_eq!(table.transliterate("中文").unwrap(), "zw");
        assert_eq!(table.transliterate("我们").unwrap(), "wm");
    }
}
