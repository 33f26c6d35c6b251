use crate::core::arith::add;
use crate::core::{Clock, ConfigProvider, ReportLine, Result};
use std::io::Write;

pub struct ReportEngine<C: Clock, P: ConfigProvider> {
    clock: C,
    config: P,
}

impl<C: Clock, P: ConfigProvider> ReportEngine<C, P> {
    pub fn new(clock: C, config: P) -> Self {
        Self { clock, config }
    }

    /// 依序寫出問候、目前時間、計數與加法結果
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::debug!("Writing greeting");
        write_line(out, &self.greeting_line())?;

        // 問候寫出後才讀取時鐘
        let time_line = ReportLine::CurrentTime(self.clock.now());
        tracing::debug!("Writing current time");
        write_line(out, &time_line)?;

        let (start, end) = (self.config.count_start(), self.config.count_end());
        tracing::debug!("Counting from {} to {}", start, end);
        for n in start..=end {
            write_line(out, &ReportLine::Count(n))?;
        }

        tracing::debug!("Writing sum");
        write_line(out, &self.sum_line())?;

        out.flush()?;
        Ok(())
    }

    /// 與 `run` 寫出的內容相同，但不做任何輸出
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![
            self.greeting_line(),
            ReportLine::CurrentTime(self.clock.now()),
        ];
        lines.extend((self.config.count_start()..=self.config.count_end()).map(ReportLine::Count));
        lines.push(self.sum_line());
        lines
    }

    fn greeting_line(&self) -> ReportLine {
        ReportLine::Greeting(self.config.greeting().to_string())
    }

    fn sum_line(&self) -> ReportLine {
        let (a, b) = self.config.addends();
        ReportLine::Sum { a, b, sum: add(a, b) }
    }
}

fn write_line<W: Write>(out: &mut W, line: &ReportLine) -> Result<()> {
    writeln!(out, "{}", line)?;
    Ok(())
}
