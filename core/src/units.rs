/// Converts whole tokens into base units, `None` on overflow.
pub fn to_base_units(whole: u64, decimals: u32) -> Option<u128> {
    10u128.checked_pow(decimals)?.checked_mul(u128::from(whole))
}

/// Renders base units as a decimal string, dropping trailing zeros of the
/// fractional part.
pub fn format_units(amount: u128, decimals: u32) -> String {
    let Some(scale) = 10u128.checked_pow(decimals) else {
        return amount.to_string();
    };
    let whole = amount / scale;
    let frac = amount % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
