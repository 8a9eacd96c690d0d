use media_item_rs::{
    MediaCategory, MediaItem, MediaItemError, MediaItemHelper, NormalizationWarning,
    NormalizerConfig, SourcePayload, SourceShape, model::COVER_SIZE_SUFFIX,
    toolkit::number::CountStyle,
};

use std::path::Path;
use strum::IntoEnumIterator;

fn load_test_data(filename: &str) -> String {
    let path = Path::new("tests/test_data").join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("读取测试文件 '{:?}' 失败: {}", path, e))
}

fn fixture_for(shape: SourceShape) -> String {
    load_test_data(&format!("{shape}.json"))
}

fn normalize_fixture(shape: SourceShape) -> MediaItem {
    MediaItemHelper::new()
        .normalize_json(shape, &fixture_for(shape))
        .unwrap_or_else(|e| panic!("转换 {shape} 失败: {e}"))
}

/// 把关键字段压成一行，便于做内联快照。
fn summary(item: &MediaItem) -> String {
    format!(
        "[{}] id={} title={} dur={} play={} danmaku={} like={} viewer={} up={} part={} extra={}",
        item.category,
        item.identifier,
        item.title,
        item.duration_text,
        item.play_count_text,
        item.danmaku_count_text,
        item.like_count_text,
        item.viewer_count_text,
        item.publisher.name,
        item.partition_name,
        item.additional_text,
    )
}

#[test_log::test]
fn test_every_shape_has_a_working_fixture() {
    for shape in SourceShape::iter() {
        let item = normalize_fixture(shape);

        assert_eq!(item.source.shape(), shape);
        assert!(!item.identifier.is_empty(), "{shape} 的标识符为空");
        assert_eq!(
            item.cover.display(),
            format!("{}{}", item.cover.original(), COVER_SIZE_SUFFIX),
            "{shape} 的展示封面不符合规则"
        );
    }
}

#[test_log::test]
fn test_source_round_trips_through_json() {
    for shape in SourceShape::iter() {
        let json = fixture_for(shape);
        let expected = SourcePayload::from_json(shape, &json).unwrap();
        let item = normalize_fixture(shape);
        assert_eq!(item.source, expected, "{shape} 没有保留原始数据");
    }
}

#[test]
fn test_partition_video_demo() {
    let item = normalize_fixture(SourceShape::PartitionVideo);
    insta::assert_snapshot!(
        summary(&item),
        @"[video] id=av123 title=Demo dur=02:05 play=1.5万 danmaku=7 like=42 viewer= up=某UP主 part=Tech extra="
    );
    assert_eq!(item.cover.display(), "http://x/y.jpg@400w_250h_1c_100q.jpg");
    assert_eq!(item.partition_id, 36);
}

#[test]
fn test_rank_item() {
    let item = normalize_fixture(SourceShape::RankItem);
    insta::assert_snapshot!(
        summary(&item),
        @"[video] id=170001 title=年度最佳 dur=01:02:05 play=234万 danmaku=1.2万 like=31万 viewer= up=排行榜常客 part=动画 extra=3215846"
    );
    assert_eq!(item.publisher.user_id, 9_824_766);
}

#[test]
fn test_recommend_card_with_uppercase_video_marker() {
    let item = normalize_fixture(SourceShape::RecommendCard);
    insta::assert_snapshot!(
        summary(&item),
        @"[video] id=880001 title=推荐给你的视频 dur=03:07 play=12.3万 danmaku=456 like= viewer= up=推荐UP主 part=单机游戏 extra=关注的UP主"
    );
}

#[test]
fn test_small_cover_card() {
    let item = normalize_fixture(SourceShape::SmallCoverCard);
    insta::assert_snapshot!(
        summary(&item),
        @"[video] id=990001 title=小封面卡片 dur=10:05 play=5.6万观看 danmaku= like= viewer= up=卡片作者 part= extra=热门"
    );
}

#[test]
fn test_live_shapes_are_always_live() {
    for shape in [
        SourceShape::LiveFollowRoom,
        SourceShape::LiveRoomCard,
        SourceShape::LiveSearchItem,
    ] {
        let item = normalize_fixture(shape);
        assert_eq!(item.category, MediaCategory::Live, "{shape}");
        assert!(item.is_live());
        assert!(!item.viewer_count_text.is_empty());
    }

    let follow = normalize_fixture(SourceShape::LiveFollowRoom);
    insta::assert_snapshot!(
        summary(&follow),
        @"[live] id=21452505 title=深夜杂谈 dur= play= danmaku= like= viewer=5.7万 up=主播A part=聊天电台 extra="
    );
}

#[test]
fn test_related_bangumi_is_pgc() {
    let item = normalize_fixture(SourceShape::RelatedVideo);
    insta::assert_snapshot!(
        summary(&item),
        @"[pgc] id=80433022 title=相关番剧 dur=23:40 play=12.3万 danmaku=789 like=6000 viewer= up=官方 part= extra=9.5"
    );
    assert_eq!(
        item.publisher.avatar_url.as_deref(),
        Some("https://i0.hdslb.com/bfs/face/relate.jpg")
    );
}

#[test]
fn test_search_results() {
    let video = normalize_fixture(SourceShape::VideoSearchItem);
    insta::assert_snapshot!(
        summary(&video),
        @"[video] id=2048 title=搜索到的视频 dur=04:03 play=9.9万 danmaku=321 like= viewer= up=搜索作者 part= extra="
    );

    let live = normalize_fixture(SourceShape::LiveSearchItem);
    assert_eq!(live.publisher.avatar_url, None);
    assert_eq!(live.publisher.user_id, 9);
    assert_eq!(live.partition_name, "单机游戏");
}

#[test]
fn test_user_space_video_flag() {
    let helper = MediaItemHelper::new();
    let json = fixture_for(SourceShape::UserSpaceVideo);

    let video = helper
        .normalize_json(SourceShape::UserSpaceVideo, &json)
        .unwrap();
    assert_eq!(video.category, MediaCategory::Video);
    assert_eq!(video.play_count_text, "2.5亿");

    let pgc_json = json.replace(r#""is_pgc": false"#, r#""is_pgc": true"#);
    let pgc = helper
        .normalize_json(SourceShape::UserSpaceVideo, &pgc_json)
        .unwrap();
    assert_eq!(pgc.category, MediaCategory::Pgc);
}

#[test_log::test]
fn test_unknown_discriminant_is_a_warning_not_an_error() {
    let helper = MediaItemHelper::new();
    let json = fixture_for(SourceShape::RecommendCard).replace(r#""AV""#, r#""game""#);

    let item = helper
        .normalize_json(SourceShape::RecommendCard, &json)
        .unwrap();

    assert_eq!(item.category, MediaCategory::Pgc);
    assert_eq!(item.duration_text, "--");
    assert_eq!(
        item.warnings,
        vec![NormalizationWarning::UnrecognizedDiscriminant {
            shape: SourceShape::RecommendCard,
            field: "card_goto",
            value: "game".to_string(),
        }]
    );
}

#[test]
fn test_minimal_payloads_use_defaults() {
    let helper = MediaItemHelper::new();
    let cases = [
        (SourceShape::PartitionVideo, r#"{"title": "t", "param": "1"}"#),
        (SourceShape::RankItem, r#"{"title": "t", "param": "1"}"#),
        (SourceShape::LiveFollowRoom, r#"{"title": "t", "roomid": 1}"#),
        (SourceShape::LiveRoomCard, r#"{"title": "t", "room_id": 1}"#),
        (SourceShape::VideoSearchItem, r#"{"title": "t", "param": "1"}"#),
        (SourceShape::LiveSearchItem, r#"{"title": "t", "roomid": 1}"#),
        (SourceShape::UserSpaceVideo, r#"{"title": "t", "param": "1"}"#),
        (
            SourceShape::SmallCoverCard,
            r#"{"small_cover_v5": {"base": {"title": "t", "param": "1"}}}"#,
        ),
    ];

    for (shape, json) in cases {
        let item = helper.normalize_json(shape, json).unwrap();
        assert_eq!(item.play_count_text, "", "{shape}");
        assert_eq!(item.duration_text, "", "{shape}");
        assert_eq!(item.reply_count_text, "", "{shape}");
        assert_eq!(item.partition_id, 0, "{shape}");
        assert_eq!(item.additional_text, "", "{shape}");
        assert_eq!(item.publisher.user_id, 0, "{shape}");
        assert_eq!(item.cover.display(), COVER_SIZE_SUFFIX, "{shape}");
        assert!(item.warnings.is_empty(), "{shape}");
    }
}

#[test]
fn test_minimal_payloads_without_discriminant_fall_back_to_pgc() {
    let helper = MediaItemHelper::new();
    let cases = [
        (SourceShape::RecommendCard, "card_goto", r#"{"title": "t", "param": "1"}"#),
        (SourceShape::RelatedVideo, "goto", r#"{"title": "t", "aid": 1}"#),
    ];

    for (shape, field, json) in cases {
        let item = helper.normalize_json(shape, json).unwrap();
        assert_eq!(item.category, MediaCategory::Pgc, "{shape}");
        assert_eq!(item.play_count_text, "", "{shape}");
        assert_eq!(item.danmaku_count_text, "", "{shape}");
        assert_eq!(item.like_count_text, "", "{shape}");
        assert_eq!(item.reply_count_text, "", "{shape}");
        assert_eq!(item.additional_text, "", "{shape}");
        assert_eq!(item.partition_id, 0, "{shape}");
        assert_eq!(item.publisher.user_id, 0, "{shape}");
        assert_eq!(item.cover.display(), COVER_SIZE_SUFFIX, "{shape}");
        assert_eq!(
            item.warnings,
            vec![NormalizationWarning::UnrecognizedDiscriminant {
                shape,
                field,
                value: String::new(),
            }]
        );
    }

    let card = helper
        .normalize_json(SourceShape::RecommendCard, r#"{"title": "t", "param": "1"}"#)
        .unwrap();
    assert_eq!(card.duration_text, "--");

    let related = helper
        .normalize_json(SourceShape::RelatedVideo, r#"{"title": "t", "aid": 1}"#)
        .unwrap();
    assert_eq!(related.duration_text, "");
}

#[test]
fn test_missing_identifier_fails_fast() {
    let helper = MediaItemHelper::new();
    let cases = [
        (SourceShape::PartitionVideo, "param"),
        (SourceShape::RankItem, "param"),
        (SourceShape::RecommendCard, "param"),
        (SourceShape::LiveFollowRoom, "roomid"),
        (SourceShape::LiveRoomCard, "room_id"),
        (SourceShape::RelatedVideo, "aid"),
        (SourceShape::VideoSearchItem, "param"),
        (SourceShape::LiveSearchItem, "roomid"),
        (SourceShape::UserSpaceVideo, "param"),
    ];

    for (shape, expected_field) in cases {
        let err = helper.normalize_json(shape, r#"{"title": "t"}"#).unwrap_err();
        match err {
            MediaItemError::MissingRequiredField { shape: s, field } => {
                assert_eq!(s, shape);
                assert_eq!(field, expected_field);
            }
            other => panic!("{shape} 返回了意外的错误: {other}"),
        }
    }

    let err = helper
        .normalize_json(SourceShape::SmallCoverCard, "{}")
        .unwrap_err();
    assert!(matches!(
        err,
        MediaItemError::MissingRequiredField {
            field: "small_cover_v5",
            ..
        }
    ));
}

#[test]
fn test_strict_title_config() {
    let helper = MediaItemHelper::with_config(NormalizerConfig {
        strict_title: true,
        ..Default::default()
    });
    let err = helper
        .normalize_json(SourceShape::PartitionVideo, r#"{"param": "av1"}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        MediaItemError::MissingRequiredField { field: "title", .. }
    ));
}

#[test]
fn test_western_count_style() {
    let helper = MediaItemHelper::with_config(NormalizerConfig {
        count_style: CountStyle::Western,
        ..Default::default()
    });
    let item = helper
        .normalize_json(
            SourceShape::PartitionVideo,
            &fixture_for(SourceShape::PartitionVideo),
        )
        .unwrap();
    assert_eq!(item.play_count_text, "15K");
}

#[test_log::test]
fn test_batch_preserves_input_order() {
    let helper = MediaItemHelper::new();
    let payloads: Vec<SourcePayload> = SourceShape::iter()
        .map(|shape| SourcePayload::from_json(shape, &fixture_for(shape)).unwrap())
        .collect();
    let expected: Vec<SourceShape> = payloads.iter().map(SourcePayload::shape).collect();

    let results = helper.normalize_batch(payloads);

    let shapes: Vec<SourceShape> = results
        .iter()
        .map(|r| r.as_ref().unwrap().source.shape())
        .collect();
    assert_eq!(shapes, expected);
}

#[test]
fn test_serialized_item_omits_source() {
    let mut item = normalize_fixture(SourceShape::PartitionVideo);
    item.warnings.push(NormalizationWarning::MissingTitle {
        shape: SourceShape::PartitionVideo,
    });

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["category"], "video");
    assert_eq!(value["cover"]["original"], "http://x/y.jpg");
    assert_eq!(value["warnings"][0]["kind"], "missing_title");
    assert_eq!(value["warnings"][0]["shape"], "partition_video");
    assert!(value.get("source").is_none());
}
