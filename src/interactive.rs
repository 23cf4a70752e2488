//! 対話式しきい値再照合モジュール
//!
//! 一致なしのとき、しきい値を下げて再照合するかを確認する。
//! 入力は80以上・現在値未満に制限。

use crate::error::{GazetteMatchError, Result};
use dialoguer::{Confirm, Input};
use gazette_match_common::THRESHOLD_MIN;

/// 再照合するしきい値を尋ねる
///
/// 再照合しない場合と、これ以上下げられない場合は None。
pub fn prompt_retry_threshold(current: u8) -> Result<Option<u8>> {
    if current <= THRESHOLD_MIN {
        println!("しきい値はすでに下限（{}）です", THRESHOLD_MIN);
        return Ok(None);
    }

    let retry = Confirm::new()
        .with_prompt("しきい値を下げて再照合しますか？")
        .default(false)
        .interact()
        .map_err(|e| GazetteMatchError::Prompt(e.to_string()))?;

    if !retry {
        return Ok(None);
    }

    let threshold: u8 = Input::new()
        .with_prompt(format!("新しいしきい値（{}-{}）", THRESHOLD_MIN, current - 1))
        .validate_with(move |value: &u8| {
            if (THRESHOLD_MIN..current).contains(value) {
                Ok(())
            } else {
                Err(format!(
                    "{}以上{}以下で入力してください",
                    THRESHOLD_MIN,
                    current - 1
                ))
            }
        })
        .interact_text()
        .map_err(|e| GazetteMatchError::Prompt(e.to_string()))?;

    Ok(Some(threshold))
}
