pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master_number(value: u32) -> bool {
    MASTER_NUMBERS.contains(&value)
}

fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// 計算日期字串的生命靈數
///
/// 忽略所有非數字字元，將數字總和反覆相加直到不大於 9；
/// 遇到 11、22、33 主數則停止。沒有數字時回傳 0
pub fn life_path_from_date(date: &str) -> u32 {
    let mut value: u32 = date.chars().filter_map(|c| c.to_digit(10)).sum();

    while value > 9 && !is_master_number(value) {
        value = digit_sum(value);
    }

    value
}
