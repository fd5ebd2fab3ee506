// Inputs whose digits are pinned rather than computed: the largest finite
// double, whose upper neighbour is infinite, and values where the scaled
// envelope lands exactly on a rounding boundary (exact decimal ties, binade
// edges, representable interval endpoints). Each record is
// (bit pattern, digits, exponent) from an exact shortest round-trip
// conversion. Generated with gen-enumerated/main.rs, which also lists where
// each input comes from.
//
// The array is a binary search tree in level order: the children of entry j
// are at 2j+1 and 2j+2, and an in-order walk visits the bit patterns in
// ascending order.
#[rustfmt::skip]
pub static ENUMERATED: [(u64, &str, i32); 168] = [
    (0x434a08a4ddd6dd5c, "14655707167963832", 17), // 1.4655707167963832e16
    (0x4343ab294061a968, "1107243643930696", 17), // 1.107243643930696e16
    (0x434fed3ff73da7ea, "1797316652953186", 17), // 1.797316652953186e16
    (0x3fb5334000000000, "8281326293945312", -1), // 0.08281326293945312
    (0x4348874c84200000, "13808324290019328", 17), // 1.3808324290019328e16
    (0x434d8f0000000000, "16640008974761984", 17), // 1.6640008974761984e16
    (0x5580000000000000, "7167183174968974", 104), // 7.167183174968974e103
    (0x2160000000000000, "6256509672447191", -147), // 6.256509672447191e-148
    (0x4341c37937e08001, "10000000000000002", 17), // 1.0000000000000002e16
    (0x4347630e4954a140, "13165674950640256", 17), // 1.3165674950640256e16
    (0x4349950000000000, "14401403300610048", 17), // 1.4401403300610048e16
    (0x434b2b85c49a84e6, "152953558005867", 17), // 1.52953558005867e16
    (0x434e62edfb8c9376, "17106047136769772", 17), // 1.7106047136769772e16
    (0x4350000000000003, "18014398509481996", 17), // 1.8014398509481996e16
    (0x63d0000000000000, "6183260036827614", 173), // 6.183260036827614e172
    (0x0f50000000000000, "6290184345309701", -234), // 6.290184345309701e-235
    (0x3e60000000000000, "29802322387695312", -7), // 2.9802322387695312e-8
    (0x4340800000000000, "9288674231451648", 16), // 9288674231451648.0
    (0x4343000000000000, "10696049115004928", 17), // 1.0696049115004928e16
    (0x4344da0000000000, "11738386138136576", 17), // 1.1738386138136576e16
    (0x4348000000000000, "13510798882111488", 17), // 1.3510798882111488e16
    (0x43496aeac382a60b, "14308861905554454", 17), // 1.4308861905554454e16
    (0x4349e9b068000000, "14587636572225536", 17), // 1.4587636572225536e16
    (0x434a3ca48edfa107, "14770053727601166", 17), // 1.4770053727601166e16
    (0x434c8070c009a800, "16045042188898304", 17), // 1.6045042188898304e16
    (0x434e0b490fc3b1e2, "16913315452642244", 17), // 1.6913315452642244e16
    (0x434f5c244154a088, "17654070125347088", 17), // 1.7654070125347088e16
    (0x434fffffffffffff, "18014398509481982", 17), // 1.8014398509481982e16
    (0x4ab0000000000000, "5986310706507379", 52), // 5.986310706507379e51
    (0x5e00000000000000, "6243497100631985", 145), // 6.243497100631985e144
    (0x75e0000000000000, "6150157786156811", 260), // 6.150157786156811e259
    (0x0660000000000000, "5641232424577593", -277), // 5.641232424577593e-278
    (0x1730000000000000, "5351097043477547", -196), // 5.351097043477547e-197
    (0x3730000000000000, "7174648137343064", -42), // 7.174648137343064e-43
    (0x3ef3400000000000, "18358230590820312", -4), // 1.8358230590820312e-5
    (0x4340000000000002, "9007199254740996", 16), // 9007199254740996.0
    (0x434194d000000000, "9897391356379136", 16), // 9897391356379136.0
    (0x43427601619df0f6, "10392595771154924", 17), // 1.0392595771154924e16
    (0x434351e200000000, "10876111323922432", 17), // 1.0876111323922432e16
    (0x43447974bcc40000, "11526083648684032", 17), // 1.1526083648684032e16
    (0x434605e026b89937, "12397819536159342", 17), // 1.2397819536159342e16
    (0x4347dda32384a64e, "13435234419297436", 17), // 1.3435234419297436e16
    (0x43482e3940fb8f0e, "13612445758594588", 17), // 1.3612445758594588e16
    (0x434909d803d1ad50, "1409539559885072", 17), // 1.409539559885072e16
    (0x4349740669a40000, "14328890617495552", 17), // 1.4328890617495552e16
    (0x4349df0fe78a640d, "1456426763975273", 17), // 1.456426763975273e16
    (0x4349f7f800000000, "1461903788343296", 17), // 1.461903788343296e16
    (0x434a1ff0c2980000, "14706936623661056", 17), // 1.4706936623661056e16
    (0x434ac76cf61e1cd3, "15075240388082086", 17), // 1.5075240388082086e16
    (0x434c4e01594bc4c4, "15934134095939976", 17), // 1.5934134095939976e16
    (0x434d2372e6da4000, "1640350146183168", 17), // 1.640350146183168e16
    (0x434dc8bab4b3f8e8, "16766957091549648", 17), // 1.6766957091549648e16
    (0x434e4cc000000000, "17057273637502976", 17), // 1.7057273637502976e16
    (0x434e87ef19219409, "17187420579768338", 17), // 1.7187420579768338e16
    (0x434f9b63ecfa17a2, "17793155515821892", 17), // 1.7793155515821892e16
    (0x434ffffffffffffd, "18014398509481978", 17), // 1.8014398509481978e16
    (0x4350000000000001, "18014398509481988", 17), // 1.8014398509481988e16
    (0x4790000000000000, "5316911983139664", 37), // 5.316911983139664e36
    (0x5120000000000000, "6070840288205404", 83), // 6.070840288205404e82
    (0x58d0000000000000, "6455624695217272", 120), // 6.455624695217272e119
    (0x61f0000000000000, "5758609657015292", 164), // 5.758609657015292e163
    (0x6c50000000000000, "5386379163185535", 214), // 5.386379163185535e213
    (0x7cf0000000000000, "6386688990511104", 294), // 6.386688990511104e293
    (0x0100000000000000, "7291122019556398", -303), // 7.291122019556398e-304
    (0x0e80000000000000, "7678447687145631", -238), // 7.678447687145631e-239
    (0x1480000000000000, "6083493012144512", -209), // 6.083493012144512e-210
    (0x2020000000000000, "5966672584960166", -153), // 5.966672584960166e-154
    (0x2910000000000000, "6653062250012736", -110), // 6.653062250012736e-111
    (0x3b20000000000000, "6617444900424222", -23), // 6.617444900424222e-24
    (0x3eb2000000000000, "10728836059570312", -5), // 1.0728836059570312e-6
    (0x3f2c900000000000, "21791458129882812", -3), // 0.00021791458129882812
    (0x400ee99400000000, "38640518188476562", 1), // 3.8640518188476562
    (0x43402a917d4e3200, "9100807976543232", 16), // 9100807976543232.0
    (0x43415c893b67a2c8, "977363816200744", 16), // 9773638162007440.0
    (0x4341c37937e07fff, "9999999999999998", 16), // 9999999999999998.0
    (0x4341ed570914b81b, "10092065348743222", 17), // 1.0092065348743222e16
    (0x4342f2373ce44f9e, "1066573727902086", 17), // 1.066573727902086e16
    (0x434322fdd4100000, "10772996274782208", 17), // 1.0772996274782208e16
    (0x43438a3c9768a422, "1100003480078138", 17), // 1.100003480078138e16
    (0x4344560000000000, "11448115068403712", 17), // 1.1448115068403712e16
    (0x434480f133790000, "11542545946509312", 17), // 1.1542545946509312e16
    (0x43451e6c00000000, "11888847432450048", 17), // 1.1888847432450048e16
    (0x4346d0c07fec0b53, "12843949372216998", 17), // 1.2843949372216998e16
    (0x4347b3747acd53c7, "13342474644400014", 17), // 1.3342474644400014e16
    (0x4347e1c6bffbf788, "13444336410160912", 17), // 1.3444336410160912e16
    (0x4348064000000000, "13524542777458688", 17), // 1.3524542777458688e16
    (0x434842c3c4862796, "13657616048475948", 17), // 1.3657616048475948e16
    (0x434888d720000000, "13811713954545664", 17), // 1.3811713954545664e16
    (0x434910362e400000, "1410939861598208", 17), // 1.410939861598208e16
    (0x434970d6ec43d255, "14321885613892778", 17), // 1.4321885613892778e16
    (0x43497bbafa94b04c, "14345834831896728", 17), // 1.4345834831896728e16
    (0x43499a0000000000, "14412398416887808", 17), // 1.4412398416887808e16
    (0x4349e37964adc2c6, "14573969874847116", 17), // 1.4573969874847116e16
    (0x4349f5f0f0bd3000, "14614579195305984", 17), // 1.4614579195305984e16
    (0x434a07fe62a5473a, "14654277105127028", 17), // 1.4654277105127028e16
    (0x434a19d95661d9ca, "1469354128465602", 17), // 1.469354128465602e16
    (0x434a269136500736, "14721509035609708", 17), // 1.4721509035609708e16
    (0x434a761a9d0c3b26, "14896412141057612", 17), // 1.4896412141057612e16
    (0x434b172fe18e731d, "15250637572597306", 17), // 1.5250637572597306e16
    (0x434c000000000000, "15762598695796736", 17), // 1.5762598695796736e16
    (0x434c50240f606efa, "1593883030984242", 17), // 1.593883030984242e16
    (0x434cf0600c000000, "16291189313503232", 17), // 1.6291189313503232e16
    (0x434d34765d600000, "16440914603933696", 17), // 1.6440914603933696e16
    (0x434dbd05f3fc5a7a, "1674121518099378", 17), // 1.674121518099378e16
    (0x434dcd1080000000, "16776490150526976", 17), // 1.6776490150526976e16
    (0x434e2a0e93d43153, "16980982798770854", 17), // 1.6980982798770854e16
    (0x434e5a92b45ae20a, "17087670877799444", 17), // 1.7087670877799444e16
    (0x434e6d82509c7315, "17129311533852202", 17), // 1.7129311533852202e16
    (0x434ea9c50db65dbe, "17261826210052988", 17), // 1.7261826210052988e16
    (0x434f800000000000, "17732923532771328", 17), // 1.7732923532771328e16
    (0x434fd4ab41dfa2c6, "17919112575403404", 17), // 1.7919112575403404e16
    (0x434fefc157c9112c, "17978675917103704", 17), // 1.7978675917103704e16
    (0x434ffffffffffffe, "1801439850948198", 17), // 1.801439850948198e16
    (0x4350000000000000, "18014398509481984", 17), // 1.8014398509481984e16
    (0x4350000000000002, "1801439850948199", 17), // 1.801439850948199e16
    (0x4580000000000000, "6189700196426902", 27), // 6.189700196426902e26
    (0x4830000000000000, "5444517870735016", 40), // 5.444517870735016e39
    (0x4b50000000000000, "6129982163463556", 55), // 6.129982163463556e54
    (0x5300000000000000, "6518515124270356", 92), // 6.518515124270356e91
    (0x5790000000000000, "6156563468186638", 114), // 6.156563468186638e113
    (0x5940000000000000, "8263199609878108", 122), // 8.263199609878108e121
    (0x6150000000000000, "5623642243178996", 161), // 5.623642243178996e160
    (0x6290000000000000, "5896816288783659", 167), // 5.896816288783659e166
    (0x6510000000000000, "6483618076376552", 179), // 6.483618076376552e178
    (0x7220000000000000, "5334411546303884", 242), // 5.334411546303884e241
    (0x77f0000000000000, "5282945311356653", 270), // 5.282945311356653e269
    (0x7fefffffffffffff, "17976931348623157", 309), // 1.7976931348623157e308
    (0x0060000000000000, "7120236347223045", -306), // 7.120236347223045e-307
    (0x0420000000000000, "8209073602596753", -288), // 8.209073602596753e-289
    (0x0d70000000000000, "5858190679279809", -243), // 5.858190679279809e-244
    (0x0eb0000000000000, "6142758149716505", -237), // 6.142758149716505e-238
    (0x13e0000000000000, "5940911144672375", -212), // 5.940911144672375e-213
    (0x1690000000000000, "5225680706521042", -199), // 5.225680706521042e-200
    (0x1da0000000000000, "5426657103235053", -165), // 5.426657103235053e-166
    (0x20f0000000000000, "4887898181599368", -149), // 4.887898181599368e-150
    (0x2800000000000000, "5075883674631299", -115), // 5.075883674631299e-116
    (0x2d70000000000000, "7854549544476363", -89), // 7.854549544476363e-90
    (0x39e0000000000000, "6310887241768095", -29), // 6.310887241768095e-30
    (0x3d30000000000000, "5684341886080802", -13), // 5.684341886080802e-14
    (0x3e70000000000000, "5960464477539063", -7), // 5.960464477539063e-8
    (0x3ee6800000000000, "10728836059570312", -4), // 1.0728836059570312e-5
    (0x3f20500000000000, "12445449829101562", -3), // 0.00012445449829101562
    (0x3f42a80000000000, "5693435668945312", -3), // 0.0005693435668945312
    (0x3fc1062000000000, "13299942016601562", 0), // 0.13299942016601562
    (0x4340000000000001, "9007199254740994", 16), // 9007199254740994.0
    (0x4340000000000003, "9007199254740998", 16), // 9007199254740998.0
    (0x43406a2267e6707f, "9240591263916286", 16), // 9240591263916286.0
    (0x4340964000000000, "933760249888768", 16), // 9337602498887680.0
    (0x43419128ee400000, "9889359171944448", 16), // 9889359171944448.0
    (0x4341c37937e07ffe, "9999999999999996", 16), // 9999999999999996.0
    (0x4341c37937e08000, "1", 17), // 1e16
    (0x4341c37937e08002, "10000000000000004", 17), // 1.0000000000000004e16
    (0x43423d1fc83f29c3, "10267512587309958", 17), // 1.0267512587309958e16
    (0x4342c28555a00000, "1056085500755968", 17), // 1.056085500755968e16
    (0x4342fc5b1c26ecc8, "10688035650656656", 17), // 1.0688035650656656e16
    (0x4343132bc0bf63da, "10738206391584692", 17), // 1.0738206391584692e16
    (0x434331e31edf0b23, "10805752205547078", 17), // 1.0805752205547078e16
    (0x43436bf0dfc00000, "10933413695455232", 17), // 1.0933413695455232e16
    (0x434392c6a2e29f57, "11018812782886574", 17), // 1.1018812782886574e16
    (0x43442a0000000000, "11351358045159424", 17), // 1.1351358045159424e16
    (0x434462556e84a1ea, "1147523720028258", 17), // 1.147523720028258e16
    (0x43447deea4800000, "115359268995072", 17), // 1.15359268995072e16
    (0x4344b47fb3764c00, "1165592019786752", 17), // 1.165592019786752e16
    (0x4344e68c5bd51f85, "11765980089433866", 17), // 1.1765980089433866e16
    (0x4345d7b2b9ea6e75, "1229627426844593", 17), // 1.229627426844593e16
    (0x43461783f94d51f7, "1243661015676619", 17), // 1.243661015676619e16
    (0x4347118a31d4d648, "129864194070724", 17), // 1.29864194070724e16
    (0x4347a9876e8d4000, "13320647209549824", 17), // 1.3320647209549824e16
];

// Finds the insertion point for key in a level-order table, returning the
// table length if every key is smaller.
fn lower_bound(table: &[(u64, &str, i32)], key: u64) -> usize {
    let n = table.len();
    let mut i = n;
    let mut j = 0;
    while j < n {
        if table[j].0 < key {
            j = 2 * j + 2;
        } else {
            i = j;
            j = 2 * j + 1;
        }
    }
    i
}

/// Returns the pinned digits and exponent for `bits`, if any.
pub fn lookup(bits: u64) -> Option<(&'static str, i32)> {
    let i = lower_bound(&ENUMERATED, bits);
    match ENUMERATED.get(i) {
        Some(&(key, digits, exp)) if key == bits => Some((digits, exp)),
        _ => None,
    }
}
