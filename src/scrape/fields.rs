/// Hidden inputs the package-selection page plants in its submission form.
/// Every one must be posted back verbatim or the site rejects the submission.
///
/// Each pattern carries exactly one capture group for the value. The markup
/// shapes are transcribed from the live pages and are intentionally uneven:
/// `lShop` closes with `">` instead of `" />`, `bShowForm` has an unquoted
/// id attribute, and the `n*` category inputs put `name` before `type`.
pub const REQUIRED_FIELDS: [(&str, &str); 22] = [
    (
        "submitNow",
        r#"<input type="hidden" name="submitNow" id="submitNow" value="(.*?)" />"#,
    ),
    (
        "listItemId",
        r#"<input type="hidden" name="listItemId" id="listItemId" value="(.*?)" />"#,
    ),
    (
        "lVerified",
        r#"<input type="hidden" name="lVerified" id="lVerified" value="(.*?)" />"#,
    ),
    (
        "lShop",
        r#"<input type="hidden" name="lShop" id="lShop" value="(.*?)">"#,
    ),
    (
        "uploader_id",
        r#"<input type="hidden" name="uploader_id" id="uploader_id" value="(.*?)" />"#,
    ),
    (
        "fresh",
        r#"<input type="hidden" name="fresh" value="(.*?)" />"#,
    ),
    (
        "adPlacementPrice",
        r#"<input type="hidden" name="adPlacementPrice" id="adPlacementPrice" value="(.*?)" />"#,
    ),
    (
        "adPlacementDiscount",
        r#"<input type="hidden" name="adPlacementDiscount" id="adPlacementDiscount" value="(.*?)" />"#,
    ),
    (
        "nDays",
        r#"<input type="hidden" name="nDays" value="(.*?)" />"#,
    ),
    (
        "modify",
        r#"<input type="hidden" name="modify" value="(.*?)" />"#,
    ),
    (
        "new",
        r#"<input type="hidden" name="new" value="(.*?)" />"#,
    ),
    (
        "nCatId",
        r#"<input name="nCatId" id="nCatId" type="hidden" size="5" value="(.*?)" />"#,
    ),
    (
        "nParentCatId",
        r#"<input name="nParentCatId" id="nParentCatId" type="hidden" size="5" value="(.*?)" />"#,
    ),
    (
        "nMainCatId",
        r#"<input name="nMainCatId" id="nMainCatId" type="hidden" size="5" value="(.*?)" />"#,
    ),
    (
        "nPath",
        r#"<input name="nPath" id="nPath" disable="false" type="hidden" value="(.*?)" />"#,
    ),
    (
        "nHide",
        r#"<input name="nHide" id="nHide" type="hidden" value="(.*?)" />"#,
    ),
    (
        "nOverlay",
        r#"<input style="display:none;" type="hidden" name="nOverlay" value="(.*?)" />"#,
    ),
    (
        "nStep",
        r#"<input style="display:none;" type="hidden" name="nStep" value="(.*?)" />"#,
    ),
    (
        "lNonJava",
        r#"<input style="display:none;" type="hidden" name="lNonJava" value="(.*?)" />"#,
    ),
    (
        "command",
        r#"<input style="display:none;" type="hidden" name="command" value="(.*?)" />"#,
    ),
    (
        "bShowForm",
        r#"<input style="display:none;" type="hidden" name="bShowForm" id=bShowForm value="(.*?)" />"#,
    ),
    (
        "lEdit",
        r#"<input style="display:none;" type="hidden" name="lEdit" value="(.*?)" />"#,
    ),
];
