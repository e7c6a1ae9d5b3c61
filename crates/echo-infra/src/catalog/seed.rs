use echo_core::domain::{
    BoxItem, BoxItemKind, Category, Emotion, PostDraft, Resource, ResourceDetail, ResourceKind,
    Topic,
};
use echo_core::ports::Picker;

/// Posts shown before anyone has written anything, newest first.
pub fn seed_posts() -> Vec<PostDraft> {
    vec![
        PostDraft::new(
            "最近考试压力好大，感觉自己快要撑不下去了。每天都在图书馆学到深夜，但是成绩还是不理想。看到同学们都很轻松的样子，心里更加焦虑了...",
            Category::Study,
            Emotion::Anxiety,
        )
        .aged_hours(2)
        .with_counts(45, 12)
        .with_reply("亲爱的同学，感受到你的压力。考试焦虑很正常，说明你很在乎成绩。但请记住，成绩不是衡量你价值的唯一标准。试着调整学习方法，适当休息，相信自己的努力会有回报的。💙"),
        PostDraft::new(
            "和室友的关系一直很紧张，他们总是深夜打游戏影响我休息。我试着沟通过几次，但是效果不明显。现在每天都很烦躁，不知道该怎么办...",
            Category::Relationship,
            Emotion::Stress,
        )
        .aged_hours(5)
        .with_counts(32, 18)
        .with_reply("宿舍矛盾确实让人很困扰。你已经尝试沟通是很好的第一步。也许可以尝试和辅导员反映情况，或者申请调换宿舍。记住，保护自己的休息权利很重要，你值得拥有一个舒适的生活环境。"),
        PostDraft::new(
            "刚和女朋友分手了，心里很难受。我们在一起两年多了，本来以为会一直走下去。现在看到校园里的情侣都会想起她，不知道该怎么走出来...",
            Category::Emotion,
            Emotion::Sad,
        )
        .aged_hours(8)
        .with_counts(67, 28)
        .with_reply("失恋的痛苦是真实而深刻的，两年多的感情不是说放下就能放下的。给自己一些时间，不要强迫自己快速走出来。试着做一些自己喜欢的事情，和朋友多交流，慢慢你会发现自己比想象中更坚强。"),
        PostDraft::new(
            "家里出了一些事情，父母最近经常吵架，每次打电话回家都能感觉到紧张的气氛。我一个人在外地上学，感觉很无助，不知道能为家里做些什么...",
            Category::Family,
            Emotion::Confused,
        )
        .aged_hours(12)
        .with_counts(28, 15)
        .with_reply("家庭问题确实让人很担心，特别是远在他乡的时候。但请记住，你已经很勇敢了，能够关心家人就说明你是个有责任感的人。有时候我们能做的有限，但保持联系、表达关心就是很好的支持。"),
        PostDraft::new(
            "大四了，面临着找工作的压力。投了很多简历都石沉大海，面试也总是失败。看着同学们一个个找到工作，我开始怀疑自己的能力，不知道未来的路在哪里...",
            Category::Career,
            Emotion::Anxiety,
        )
        .aged_hours(24)
        .with_counts(89, 45)
        .with_reply("找工作的过程确实充满挑战，每一次拒绝都很打击人。但请记住，失败不代表你不够好，可能只是还没找到最适合的位置。继续提升自己，保持信心，属于你的机会一定会来的。"),
    ]
}

/// One page of older posts for infinite scroll.
pub fn more_posts() -> Vec<PostDraft> {
    seed_posts().into_iter().take(3).collect()
}

fn topic(
    id: &str,
    title: &str,
    participants: u32,
    same_confusion_pct: u8,
    hot: bool,
    category: Category,
) -> Topic {
    Topic {
        id: id.to_string(),
        title: title.to_string(),
        participants,
        same_confusion_pct,
        hot,
        category,
    }
}

pub fn topics() -> Vec<Topic> {
    vec![
        topic("topic_1", "如何看待大学中的内卷现象？", 1234, 78, true, Category::Study),
        topic("topic_2", "室友之间应该如何建立良好的关系？", 856, 65, true, Category::Relationship),
        topic("topic_3", "大学生应该如何平衡学习和社交？", 2341, 82, true, Category::Study),
        topic("topic_4", "面对毕业即失业的压力，我们该怎么办？", 1567, 71, false, Category::Career),
        topic("topic_5", "异地恋能否经得起时间和距离的考验？", 987, 59, false, Category::Emotion),
    ]
}

fn resource(
    id: &str,
    title: &str,
    kind: ResourceKind,
    description: &str,
    detail: ResourceDetail,
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        description: description.to_string(),
        detail,
    }
}

pub fn resources() -> Vec<Resource> {
    vec![
        resource(
            "resource_1",
            "24小时心理援助热线",
            ResourceKind::Hotline,
            "专业心理咨询师24小时在线，随时为你提供帮助",
            ResourceDetail::Contact("400-123-4567".into()),
        ),
        resource(
            "resource_2",
            "校园心理咨询中心",
            ResourceKind::Counseling,
            "免费的心理咨询服务，预约制，保护隐私",
            ResourceDetail::Contact("预约电话：010-12345678".into()),
        ),
        resource(
            "resource_3",
            "情绪调节呼吸练习",
            ResourceKind::Exercise,
            "简单的呼吸练习，帮助缓解焦虑和压力",
            ResourceDetail::Content("深呼吸练习：吸气4秒，屏息4秒，呼气6秒".into()),
        ),
        resource(
            "resource_4",
            "治愈系音乐推荐",
            ResourceKind::Music,
            "精选的轻音乐和冥想音乐，帮助放松心情",
            ResourceDetail::Content("推荐歌单：《森林狂想曲》、《雨的印记》".into()),
        ),
    ]
}

pub fn box_items() -> Vec<BoxItem> {
    let item = |kind, title: &str, content: &str| BoxItem {
        kind,
        title: title.to_string(),
        content: content.to_string(),
    };

    vec![
        item(
            BoxItemKind::Breathing,
            "呼吸练习",
            "深呼吸：吸气4秒，屏息4秒，呼气6秒。重复5次，感受身心的放松。",
        ),
        item(
            BoxItemKind::Music,
            "治愈音乐",
            "推荐：《森林狂想曲》- 让自然的旋律带走你的烦恼",
        ),
        item(
            BoxItemKind::Quote,
            "温暖语录",
            "\"每一个不曾起舞的日子，都是对生命的辜负。\" - 尼采",
        ),
        item(
            BoxItemKind::Exercise,
            "放松练习",
            "试试这个：闭上眼睛，想象自己在一个安全温暖的地方，感受那份宁静。",
        ),
    ]
}

/// Open the mystery box.
pub fn draw_box_item(picker: &Picker) -> BoxItem {
    let mut items = box_items();
    let index = picker(items.len()).min(items.len() - 1);
    items.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use echo_core::domain::{AuthorId, MIN_POST_CHARS, PostId, ReplyStatus, visible_len};
    use echo_core::ports::fixed_picker;

    use super::*;

    #[test]
    fn test_seed_posts_are_replied_and_valid() {
        let now = Utc::now();
        let posts: Vec<_> = seed_posts()
            .into_iter()
            .enumerate()
            .map(|(i, draft)| draft.into_post(PostId::new(i as u64 + 1), AuthorId::generate(), now))
            .collect();

        assert_eq!(posts.len(), 5);
        for post in &posts {
            assert!(visible_len(&post.content) >= MIN_POST_CHARS);
            assert_eq!(post.status, ReplyStatus::Replied);
        }
        assert!(posts.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert_eq!(posts[4].likes, 89);
    }

    #[test]
    fn test_more_posts_is_one_page() {
        let page = more_posts();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].category, Category::Study);
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(topics().len(), 5);
        assert_eq!(topics().iter().filter(|t| t.hot).count(), 3);
        assert_eq!(resources().len(), 4);
        assert_eq!(box_items().len(), 4);
    }

    #[test]
    fn test_draw_box_item_uses_picker() {
        assert_eq!(draw_box_item(&fixed_picker(2)).kind, BoxItemKind::Quote);
        let out_of_range: Picker = Arc::new(|_: usize| 40);
        assert_eq!(draw_box_item(&out_of_range).kind, BoxItemKind::Exercise);
    }
}
